// crates/film/src/domain/builders/film_builder.rs

use crate::domain::entities::Film;
use crate::domain::value_objects::{Description, FilmDuration, FilmId, FilmName, ReleaseDate};

pub struct FilmBuilder {
    id: FilmId,
    name: FilmName,
    duration: FilmDuration,
    description: Option<Description>,
    release_date: Option<ReleaseDate>,
}

impl FilmBuilder {
    pub fn new(id: FilmId, name: FilmName, duration: FilmDuration) -> Self {
        Self {
            id,
            name,
            duration,
            description: None,
            release_date: None,
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_optional_description(mut self, description: Option<Description>) -> Self {
        self.description = description;
        self
    }

    pub fn with_release_date(mut self, release_date: ReleaseDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_optional_release_date(mut self, release_date: Option<ReleaseDate>) -> Self {
        self.release_date = release_date;
        self
    }

    /// Un film neuf n'a aucun like
    pub fn build(self) -> Film {
        Film::from_parts(
            self.id,
            self.name,
            self.description,
            self.release_date,
            self.duration,
        )
    }
}
