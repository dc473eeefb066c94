mod create_film_command;
mod create_film_use_case;

pub use create_film_command::CreateFilmCommand;
pub use create_film_use_case::CreateFilmUseCase;
