mod film_repository;

pub use film_repository::FilmRepository;
