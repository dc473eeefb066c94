// crates/film/src/infrastructure/memory/film_likes_cleaner.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;
use user::domain::repositories::UserReferences;
use user::domain::value_objects::UserId;

use crate::domain::repositories::FilmRepository;

/// Purge les likes d'un utilisateur supprimé.
/// Appelé sous le verrou d'écriture des utilisateurs (ordre users → films).
pub struct FilmLikesCleaner {
    film_repo: Arc<dyn FilmRepository>,
}

impl FilmLikesCleaner {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }
}

impl UserReferences for FilmLikesCleaner {
    fn release_user(&self, id: UserId) -> Result<()> {
        let purged = self.film_repo.remove_likes_by_user(id)?;
        debug!(user_id = %id, purged, "likes released");
        Ok(())
    }
}
