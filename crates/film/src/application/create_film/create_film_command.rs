// crates/film/src/application/create_film/create_film_command.rs

use serde::Deserialize;

use crate::domain::params::NewFilmParams;

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CreateFilmCommand {
    pub params: NewFilmParams,
}

impl From<NewFilmParams> for CreateFilmCommand {
    fn from(params: NewFilmParams) -> Self {
        Self { params }
    }
}
