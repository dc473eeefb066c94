// crates/film/src/application/remove_like/remove_like_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::info;
use user::domain::repositories::UserRepository;

use crate::application::remove_like::RemoveLikeCommand;
use crate::domain::repositories::FilmRepository;

pub struct RemoveLikeUseCase {
    film_repo: Arc<dyn FilmRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl RemoveLikeUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            film_repo,
            user_repo,
        }
    }

    /// Retirer un like absent ne fait rien
    pub fn execute(&self, command: RemoveLikeCommand) -> Result<()> {
        let RemoveLikeCommand { film_id, user_id } = command;

        self.film_repo
            .find_film_by_id(film_id)?
            .ok_or_not_found(film_id)?;

        let mut removed = false;
        self.user_repo.with_existing_user(user_id, &mut || {
            removed = self.film_repo.remove_like(film_id, user_id)?;
            Ok(())
        })?;

        info!(%film_id, %user_id, removed, "like removed");
        Ok(())
    }
}
