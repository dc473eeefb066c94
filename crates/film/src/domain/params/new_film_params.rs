// crates/film/src/domain/params/new_film_params.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewFilmParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Signé : une durée négative doit arriver jusqu'à la validation
    pub duration: Option<i64>,
}

impl NewFilmParams {
    pub fn new(name: impl Into<String>, duration: i64) -> Self {
        Self {
            name: Some(name.into()),
            duration: Some(duration),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }
}
