mod delete_film_command;
mod delete_film_use_case;

pub use delete_film_command::DeleteFilmCommand;
pub use delete_film_use_case::DeleteFilmUseCase;
