// crates/film/src/application/create_film/create_film_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::create_film::CreateFilmCommand;
use crate::domain::entities::Film;
use crate::domain::repositories::FilmRepository;
use crate::domain::validation::FilmValidator;

pub struct CreateFilmUseCase {
    film_repo: Arc<dyn FilmRepository>,
}

impl CreateFilmUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    pub fn execute(&self, command: CreateFilmCommand) -> Result<Film> {
        let draft = FilmValidator::new()
            .validate_new(&command.params)
            .inspect_err(|err| warn!(field = err.field(), "film creation rejected: {}", err))?;

        let film = self.film_repo.create_film(draft)?;

        info!(film_id = %film.id(), name = %film.name(), "film created");
        Ok(film)
    }
}
