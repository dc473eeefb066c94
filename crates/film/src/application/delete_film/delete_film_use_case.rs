// crates/film/src/application/delete_film/delete_film_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::delete_film::DeleteFilmCommand;
use crate::domain::repositories::FilmRepository;

pub struct DeleteFilmUseCase {
    film_repo: Arc<dyn FilmRepository>,
}

impl DeleteFilmUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    /// Les likes disparaissent avec le film. `false` si le film n'existait pas.
    pub fn execute(&self, command: DeleteFilmCommand) -> Result<bool> {
        let deleted = self.film_repo.delete_film(command.film_id)?;

        if deleted {
            info!(film_id = %command.film_id, "film deleted");
        } else {
            debug!(film_id = %command.film_id, "delete skipped, unknown film");
        }
        Ok(deleted)
    }
}
