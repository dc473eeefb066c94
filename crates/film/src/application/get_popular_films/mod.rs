mod get_popular_films_command;
mod get_popular_films_use_case;

pub use get_popular_films_command::GetPopularFilmsCommand;
pub use get_popular_films_use_case::GetPopularFilmsUseCase;
