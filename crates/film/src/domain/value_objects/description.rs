// crates/film/src/domain/value_objects/description.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Longueur maximale, en caractères Unicode (pas en octets)
    pub const MAX_LENGTH: usize = 200;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let description = Self(value.into());
        description.validate()?;
        Ok(description)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Description {
    fn validate(&self) -> Result<()> {
        let length = self.0.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "description",
                reason: format!(
                    "Description is {} characters long, at most {} allowed",
                    length,
                    Self::MAX_LENGTH
                ),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}
