// crates/film/src/application/list_films/list_films_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::Film;
use crate::domain::repositories::FilmRepository;

pub struct ListFilmsUseCase {
    film_repo: Arc<dyn FilmRepository>,
}

impl ListFilmsUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    pub fn execute(&self) -> Result<Vec<Film>> {
        let films = self.film_repo.list_films()?;
        debug!(count = films.len(), "list films");
        Ok(films)
    }
}
