// crates/film/src/application/get_film/get_film_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::application::get_film::GetFilmCommand;
use crate::domain::entities::Film;
use crate::domain::repositories::FilmRepository;

pub struct GetFilmUseCase {
    film_repo: Arc<dyn FilmRepository>,
}

impl GetFilmUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    pub fn execute(&self, command: GetFilmCommand) -> Result<Film> {
        debug!(film_id = %command.film_id, "get film");

        self.film_repo
            .find_film_by_id(command.film_id)?
            .ok_or_not_found(command.film_id)
    }
}
