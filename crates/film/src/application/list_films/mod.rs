mod list_films_use_case;

pub use list_films_use_case::ListFilmsUseCase;
