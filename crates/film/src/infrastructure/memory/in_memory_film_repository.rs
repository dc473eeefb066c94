// crates/film/src/infrastructure/memory/in_memory_film_repository.rs

use parking_lot::RwLock;
use shared_kernel::domain::store::EntityTable;
use shared_kernel::domain::IdSequence;
use shared_kernel::errors::Result;
use user::domain::value_objects::UserId;

use crate::domain::entities::Film;
use crate::domain::repositories::FilmRepository;
use crate::domain::validation::FilmDraft;
use crate::domain::value_objects::FilmId;

pub struct InMemoryFilmRepository {
    films: RwLock<EntityTable<Film>>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self::with_sequence(IdSequence::new())
    }

    pub fn with_sequence(sequence: IdSequence) -> Self {
        Self {
            films: RwLock::new(EntityTable::with_sequence(sequence)),
        }
    }

    pub fn len(&self) -> usize {
        self.films.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn create_film(&self, draft: FilmDraft) -> Result<Film> {
        self.films.write().add(|id| draft.into_film(id))
    }

    fn find_film_by_id(&self, id: FilmId) -> Result<Option<Film>> {
        Ok(self.films.read().find(&id).cloned())
    }

    fn list_films(&self) -> Result<Vec<Film>> {
        Ok(self.films.read().get_all())
    }

    fn update_film(
        &self,
        id: FilmId,
        apply: &mut dyn FnMut(&mut Film) -> Result<()>,
    ) -> Result<Film> {
        let mut films = self.films.write();

        let mut working = films.get_by_id(&id)?.clone();
        apply(&mut working)?;

        films.update(working)
    }

    fn delete_film(&self, id: FilmId) -> Result<bool> {
        Ok(self.films.write().delete(&id))
    }

    fn add_like(&self, film_id: FilmId, user_id: UserId) -> Result<bool> {
        let mut films = self.films.write();
        let mut film = films.get_by_id(&film_id)?.clone();

        let added = film.add_like(user_id);
        if added {
            films.update(film)?;
        }
        Ok(added)
    }

    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> Result<bool> {
        let mut films = self.films.write();
        let mut film = films.get_by_id(&film_id)?.clone();

        let removed = film.remove_like(user_id);
        if removed {
            films.update(film)?;
        }
        Ok(removed)
    }

    fn remove_likes_by_user(&self, user_id: UserId) -> Result<usize> {
        let mut films = self.films.write();
        let mut purged = 0;
        for film in films.iter_mut() {
            if film.remove_like(user_id) {
                purged += 1;
            }
        }
        Ok(purged)
    }
}
