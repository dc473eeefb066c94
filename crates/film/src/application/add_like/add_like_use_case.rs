// crates/film/src/application/add_like/add_like_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::info;
use user::domain::repositories::UserRepository;

use crate::application::add_like::AddLikeCommand;
use crate::domain::repositories::FilmRepository;

pub struct AddLikeUseCase {
    film_repo: Arc<dyn FilmRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AddLikeUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            film_repo,
            user_repo,
        }
    }

    pub fn execute(&self, command: AddLikeCommand) -> Result<()> {
        let AddLikeCommand { film_id, user_id } = command;

        // 1. LE FILM D'ABORD
        self.film_repo
            .find_film_by_id(film_id)?
            .ok_or_not_found(film_id)?;

        // 2. PUIS L'UTILISATEUR, tenu présent pendant l'écriture du like
        let mut added = false;
        self.user_repo.with_existing_user(user_id, &mut || {
            added = self.film_repo.add_like(film_id, user_id)?;
            Ok(())
        })?;

        info!(%film_id, %user_id, added, "like added");
        Ok(())
    }
}
