mod update_film_command;
mod update_film_use_case;

pub use update_film_command::UpdateFilmCommand;
pub use update_film_use_case::UpdateFilmUseCase;
