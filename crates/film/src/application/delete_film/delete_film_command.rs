// crates/film/src/application/delete_film/delete_film_command.rs

use crate::domain::value_objects::FilmId;

#[derive(Debug, Clone, Copy)]
pub struct DeleteFilmCommand {
    pub film_id: FilmId,
}
