// crates/shared-kernel/src/domain/store/entity_table.rs

use indexmap::IndexMap;

use crate::domain::entities::Entity;
use crate::domain::IdSequence;
use crate::errors::Result;

/// Collection en mémoire indexée par id, instanciée une fois par type d'entité.
///
/// La table ne verrouille rien : c'est le repository qui l'enveloppe (RwLock)
/// et rend chaque opération atomique. L'ordre d'insertion est conservé,
/// `get_all` est donc déterministe.
#[derive(Debug)]
pub struct EntityTable<E: Entity> {
    rows: IndexMap<E::Id, E>,
    sequence: IdSequence,
}

impl<E: Entity> EntityTable<E> {
    pub fn new() -> Self {
        Self::with_sequence(IdSequence::new())
    }

    pub fn with_sequence(sequence: IdSequence) -> Self {
        Self {
            rows: IndexMap::new(),
            sequence,
        }
    }

    /// Attribue un id neuf, construit l'entité avec et la stocke.
    /// L'entité n'existe jamais sans id : c'est `build` qui la fabrique.
    pub fn add<F>(&mut self, build: F) -> Result<E>
    where
        F: FnOnce(E::Id) -> E,
    {
        let id = self.sequence.next::<E::Id>()?;
        let entity = build(id);
        debug_assert_eq!(entity.id(), id);

        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    /// Remplacement complet de l'entité (aucune fusion ici)
    pub fn update(&mut self, entity: E) -> Result<E> {
        let id = entity.id();
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(E::not_found(id)),
        }
    }

    pub fn get_by_id(&self, id: &E::Id) -> Result<&E> {
        self.rows.get(id).ok_or_else(|| E::not_found(id))
    }

    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.rows.get(id)
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.rows.contains_key(id)
    }

    pub fn get_all(&self) -> Vec<E> {
        self.rows.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.rows.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.rows.values_mut()
    }

    /// `true` si une entité a été retirée. Un id absent n'est pas une erreur.
    pub fn delete(&mut self, id: &E::Id) -> bool {
        self.rows.shift_remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: Entity> Default for EntityTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EntityMetadata;
    use crate::domain::Identifier;
    use crate::errors::DomainError;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct NoteId(u64);

    impl fmt::Display for NoteId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Identifier for NoteId {
        fn from_raw(value: u64) -> Self {
            Self(value)
        }
        fn value(&self) -> u64 {
            self.0
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        text: String,
    }

    impl EntityMetadata for Note {
        fn entity_name() -> &'static str {
            "Note"
        }
    }

    impl Entity for Note {
        type Id = NoteId;
        fn id(&self) -> NoteId {
            self.id
        }
    }

    fn note(text: &str) -> impl FnOnce(NoteId) -> Note + '_ {
        move |id| Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut table = EntityTable::<Note>::new();

        let a = table.add(note("a")).unwrap();
        let b = table.add(note("b")).unwrap();

        assert_eq!(a.id, NoteId(1));
        assert_eq!(b.id, NoteId(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_replaces_whole_entity() {
        let mut table = EntityTable::<Note>::new();
        let mut stored = table.add(note("draft")).unwrap();

        stored.text = "final".into();
        table.update(stored.clone()).unwrap();

        assert_eq!(table.get_by_id(&stored.id).unwrap().text, "final");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut table = EntityTable::<Note>::new();
        let ghost = Note {
            id: NoteId(7),
            text: "ghost".into(),
        };

        let result = table.update(ghost);

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "Note", ref id }) if id == "7"
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_get_by_id_not_found() {
        let table = EntityTable::<Note>::new();
        assert!(table.get_by_id(&NoteId(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_reports_presence_and_never_reuses_ids() {
        let mut table = EntityTable::<Note>::new();
        let first = table.add(note("first")).unwrap();

        assert!(table.delete(&first.id));
        assert!(!table.delete(&first.id));

        let second = table.add(note("second")).unwrap();
        assert_eq!(second.id, NoteId(2));
    }

    #[test]
    fn test_get_all_keeps_insertion_order_after_delete() {
        let mut table = EntityTable::<Note>::new();
        let a = table.add(note("a")).unwrap();
        table.add(note("b")).unwrap();
        table.add(note("c")).unwrap();

        table.delete(&a.id);
        table.add(note("d")).unwrap();

        let texts: Vec<_> = table.get_all().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_with_sequence_resumes_numbering() {
        let mut table = EntityTable::<Note>::with_sequence(IdSequence::starting_at(100));
        assert_eq!(table.add(note("x")).unwrap().id, NoteId(100));
    }

    #[test]
    fn test_add_fails_once_sequence_is_exhausted() {
        let mut table = EntityTable::<Note>::with_sequence(IdSequence::starting_at(u64::MAX));

        assert_eq!(table.add(note("last")).unwrap().id, NoteId(u64::MAX));

        let result = table.add(note("overflow"));
        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(table.len(), 1);
    }
}
