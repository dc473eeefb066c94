mod film_likes_cleaner;
mod in_memory_film_repository;

pub use film_likes_cleaner::FilmLikesCleaner;
pub use in_memory_film_repository::InMemoryFilmRepository;
