// crates/film/src/application/get_popular_films/get_popular_films_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::application::get_popular_films::GetPopularFilmsCommand;
use crate::domain::entities::Film;
use crate::domain::ranking::{rank_by_popularity, DEFAULT_POPULAR_COUNT};
use crate::domain::repositories::FilmRepository;

pub struct GetPopularFilmsUseCase {
    film_repo: Arc<dyn FilmRepository>,
    default_count: usize,
}

impl GetPopularFilmsUseCase {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self::with_default_count(film_repo, DEFAULT_POPULAR_COUNT)
    }

    pub fn with_default_count(film_repo: Arc<dyn FilmRepository>, default_count: usize) -> Self {
        Self {
            film_repo,
            default_count,
        }
    }

    /// Classement calculé sur un instantané cohérent du store
    pub fn execute(&self, command: GetPopularFilmsCommand) -> Result<Vec<Film>> {
        let count = command.count.unwrap_or(self.default_count);

        let ranked = rank_by_popularity(self.film_repo.list_films()?, count);

        debug!(count, returned = ranked.len(), "popular films");
        Ok(ranked)
    }
}
