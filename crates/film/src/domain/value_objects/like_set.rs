// crates/film/src/domain/value_objects/like_set.rs

use serde::Serialize;
use std::collections::BTreeSet;
use user::domain::value_objects::UserId;

/// Ensemble des utilisateurs ayant aimé un film. Un like par utilisateur.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LikeSet(BTreeSet<UserId>);

impl LikeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `false` si l'utilisateur avait déjà aimé
    pub fn add(&mut self, user_id: UserId) -> bool {
        self.0.insert(user_id)
    }

    /// `false` si aucun like n'existait
    pub fn remove(&mut self, user_id: UserId) -> bool {
        self.0.remove(&user_id)
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<UserId> for LikeSet {
    fn from_iter<T: IntoIterator<Item = UserId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
