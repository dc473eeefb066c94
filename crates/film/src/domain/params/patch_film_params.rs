// crates/film/src/domain/params/patch_film_params.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mise à jour partielle d'un film : `None` signifie "inchangé"
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchFilmParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
}

impl PatchFilmParams {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.release_date.is_none()
            && self.duration.is_none()
    }
}
