// crates/film/src/application/get_film/get_film_command.rs

use crate::domain::value_objects::FilmId;

#[derive(Debug, Clone, Copy)]
pub struct GetFilmCommand {
    pub film_id: FilmId,
}
