// crates/film/src/domain/entities/film.rs

use serde::Serialize;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use user::domain::value_objects::UserId;

use crate::domain::builders::FilmBuilder;
use crate::domain::validation::FilmChanges;
use crate::domain::value_objects::{Description, FilmDuration, FilmId, FilmName, LikeSet, ReleaseDate};

/// Agrégat Film. Porte son propre registre de likes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    id: FilmId,
    name: FilmName,
    description: Option<Description>,
    release_date: Option<ReleaseDate>,
    duration: FilmDuration,
    likes: LikeSet,
}

impl Film {
    pub fn builder(id: FilmId, name: FilmName, duration: FilmDuration) -> FilmBuilder {
        FilmBuilder::new(id, name, duration)
    }

    pub(crate) fn from_parts(
        id: FilmId,
        name: FilmName,
        description: Option<Description>,
        release_date: Option<ReleaseDate>,
        duration: FilmDuration,
    ) -> Self {
        Self {
            id,
            name,
            description,
            release_date,
            duration,
            likes: LikeSet::new(),
        }
    }

    // ==========================================
    // FUSION PARTIELLE
    // ==========================================

    /// Écrase les champs fournis. Le registre de likes n'est jamais touché.
    pub fn apply_changes(&mut self, changes: FilmChanges) -> bool {
        let mut changed = false;

        if let Some(name) = changes.name {
            changed |= replace(&mut self.name, name);
        }
        if let Some(description) = changes.description {
            changed |= replace(&mut self.description, Some(description));
        }
        if let Some(release_date) = changes.release_date {
            changed |= replace(&mut self.release_date, Some(release_date));
        }
        if let Some(duration) = changes.duration {
            changed |= replace(&mut self.duration, duration);
        }

        changed
    }

    // ==========================================
    // LIKES
    // ==========================================

    pub fn add_like(&mut self, user_id: UserId) -> bool {
        self.likes.add(user_id)
    }

    pub fn remove_like(&mut self, user_id: UserId) -> bool {
        self.likes.remove(user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    // ==========================================
    // GETTERS
    // ==========================================

    pub fn id(&self) -> FilmId {
        self.id
    }

    pub fn name(&self) -> &FilmName {
        &self.name
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn release_date(&self) -> Option<ReleaseDate> {
        self.release_date
    }

    pub fn duration(&self) -> FilmDuration {
        self.duration
    }

    pub fn likes(&self) -> &LikeSet {
        &self.likes
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl EntityMetadata for Film {
    fn entity_name() -> &'static str {
        "Film"
    }
}

impl Entity for Film {
    type Id = FilmId;

    fn id(&self) -> FilmId {
        self.id
    }
}
