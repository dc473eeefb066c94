// crates/film/src/domain/validation/film_validator.rs

use shared_kernel::errors::Result;

use crate::domain::builders::FilmBuilder;
use crate::domain::entities::Film;
use crate::domain::params::{NewFilmParams, PatchFilmParams};
use crate::domain::value_objects::{Description, FilmDuration, FilmId, FilmName, ReleaseDate};

#[derive(Debug, Clone, PartialEq)]
pub struct FilmDraft {
    pub name: FilmName,
    pub description: Option<Description>,
    pub release_date: Option<ReleaseDate>,
    pub duration: FilmDuration,
}

impl FilmDraft {
    pub fn into_film(self, id: FilmId) -> Film {
        FilmBuilder::new(id, self.name, self.duration)
            .with_optional_description(self.description)
            .with_optional_release_date(self.release_date)
            .build()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilmChanges {
    pub name: Option<FilmName>,
    pub description: Option<Description>,
    pub release_date: Option<ReleaseDate>,
    pub duration: Option<FilmDuration>,
}

/// Règles d'un film. Aucune ne dépend de la date du jour.
///
/// Ordre fixe : name, description, release_date, duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilmValidator;

impl FilmValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_new(&self, params: &NewFilmParams) -> Result<FilmDraft> {
        let name = FilmName::try_new(params.name.clone().unwrap_or_default())?;
        let description = params.description.clone().map(Description::try_new).transpose()?;
        let release_date = params.release_date.map(ReleaseDate::try_new).transpose()?;
        // Durée absente : même erreur qu'une durée nulle
        let duration = FilmDuration::try_new(params.duration.unwrap_or(0))?;

        Ok(FilmDraft {
            name,
            description,
            release_date,
            duration,
        })
    }

    pub fn validate_patch(&self, params: &PatchFilmParams) -> Result<FilmChanges> {
        let name = params.name.clone().map(FilmName::try_new).transpose()?;
        let description = params.description.clone().map(Description::try_new).transpose()?;
        let release_date = params.release_date.map(ReleaseDate::try_new).transpose()?;
        let duration = params.duration.map(FilmDuration::try_new).transpose()?;

        Ok(FilmChanges {
            name,
            description,
            release_date,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_kernel::errors::DomainError;

    fn field_of(params: &NewFilmParams) -> Option<&'static str> {
        FilmValidator::new().validate_new(params).unwrap_err().field()
    }

    #[test]
    fn test_validate_new_happy_path() {
        let params = NewFilmParams::new("nisi eiusmod", 100)
            .with_description("adipisicing")
            .with_release_date(NaiveDate::from_ymd_opt(1967, 3, 25).unwrap());

        let draft = FilmValidator::new().validate_new(&params).unwrap();

        assert_eq!(draft.name.as_str(), "nisi eiusmod");
        assert_eq!(draft.duration.minutes(), 100);
    }

    #[test]
    fn test_blank_name_reported_before_long_description() {
        let params = NewFilmParams::new("", 100).with_description("x".repeat(201));
        assert_eq!(field_of(&params), Some("name"));
    }

    #[test]
    fn test_full_rule_order() {
        let mut params = NewFilmParams {
            name: Some("".into()),
            description: Some("x".repeat(201)),
            release_date: NaiveDate::from_ymd_opt(1890, 3, 25),
            duration: Some(-200),
        };
        assert_eq!(field_of(&params), Some("name"));

        params.name = Some("Film".into());
        assert_eq!(field_of(&params), Some("description"));

        params.description = None;
        assert_eq!(field_of(&params), Some("release_date"));

        params.release_date = None;
        assert_eq!(field_of(&params), Some("duration"));
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(field_of(&NewFilmParams::default()), Some("name"));

        let params = NewFilmParams {
            name: Some("Film".into()),
            ..Default::default()
        };
        assert_eq!(field_of(&params), Some("duration"));
    }

    #[test]
    fn test_validate_patch_only_present_fields() {
        let params = PatchFilmParams {
            duration: Some(190),
            ..Default::default()
        };

        let changes = FilmValidator::new().validate_patch(&params).unwrap();

        assert_eq!(changes.duration.map(|d| d.minutes()), Some(190));
        assert!(changes.name.is_none());
        assert!(changes.description.is_none());
    }

    #[test]
    fn test_validate_patch_rejects_bad_release_date() {
        let params = PatchFilmParams {
            release_date: NaiveDate::from_ymd_opt(1895, 12, 27),
            ..Default::default()
        };

        let result = FilmValidator::new().validate_patch(&params);
        assert!(matches!(result, Err(DomainError::Validation { field: "release_date", .. })));
    }
}
