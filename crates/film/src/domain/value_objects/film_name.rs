// crates/film/src/domain/value_objects/film_name.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilmName(String);

impl FilmName {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let name = Self(value.into());
        name.validate()?;
        Ok(name)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for FilmName {
    fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "name",
                reason: "Film name cannot be blank".into(),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for FilmName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<FilmName> for String {
    fn from(name: FilmName) -> Self {
        name.0
    }
}

impl std::fmt::Display for FilmName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
