// crates/film/src/application/update_film/update_film_command.rs

use crate::domain::params::PatchFilmParams;
use crate::domain::value_objects::FilmId;

#[derive(Debug, Clone)]
pub struct UpdateFilmCommand {
    pub film_id: FilmId,
    pub params: PatchFilmParams,
}
