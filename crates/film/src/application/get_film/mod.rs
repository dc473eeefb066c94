mod get_film_command;
mod get_film_use_case;

pub use get_film_command::GetFilmCommand;
pub use get_film_use_case::GetFilmUseCase;
