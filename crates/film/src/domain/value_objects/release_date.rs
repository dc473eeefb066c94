// crates/film/src/domain/value_objects/release_date.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Date de sortie, jamais antérieure à la première projection publique
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// Plus ancienne date admise : 1895-12-28
    pub const EARLIEST: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
        Some(date) => date,
        None => panic!("invalid earliest release date"),
    };

    pub fn try_new(date: NaiveDate) -> Result<Self> {
        let release_date = Self(date);
        release_date.validate()?;
        Ok(release_date)
    }

    pub fn from_raw(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ReleaseDate {
    fn validate(&self) -> Result<()> {
        if self.0 < Self::EARLIEST {
            return Err(DomainError::Validation {
                field: "release_date",
                reason: "Release date cannot be earlier than 1895-12-28".into(),
            });
        }
        Ok(())
    }
}

impl TryFrom<NaiveDate> for ReleaseDate {
    type Error = DomainError;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::try_new(date)
    }
}

impl From<ReleaseDate> for NaiveDate {
    fn from(release_date: ReleaseDate) -> Self {
        release_date.0
    }
}

impl std::fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
