// crates/film/src/application/update_film/update_film_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::update_film::UpdateFilmCommand;
use crate::domain::entities::Film;
use crate::domain::repositories::FilmRepository;
use crate::domain::validation::FilmValidator;

pub struct UpdateFilmUseCase {
    film_repo: Arc<dyn FilmRepository>,
}

impl UpdateFilmUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    pub fn execute(&self, command: UpdateFilmCommand) -> Result<Film> {
        if command.params.is_empty() {
            debug!(film_id = %command.film_id, "empty film patch, nothing to merge");
            return self
                .film_repo
                .find_film_by_id(command.film_id)?
                .ok_or_not_found(command.film_id);
        }

        let validator = FilmValidator::new();
        let mut changed = false;

        let film = self
            .film_repo
            .update_film(command.film_id, &mut |film| {
                let changes = validator.validate_patch(&command.params)?;
                changed = film.apply_changes(changes);
                Ok(())
            })
            .inspect_err(|err| {
                if err.is_validation() {
                    warn!(film_id = %command.film_id, field = err.field(), "film update rejected: {}", err);
                }
            })?;

        info!(film_id = %film.id(), changed, "film updated");
        Ok(film)
    }
}
