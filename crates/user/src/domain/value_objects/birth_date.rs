// crates/user/src/domain/value_objects/birth_date.rs

use chrono::NaiveDate;
use serde::Serialize;
use shared_kernel::errors::{DomainError, Result};

/// Date de naissance. La règle "pas dans le futur" dépend de la date du jour,
/// fournie par l'appelant (horloge injectée) plutôt que lue ici.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn try_new(date: NaiveDate, today: NaiveDate) -> Result<Self> {
        let birth_date = Self(date);
        birth_date.validate_at(today)?;
        Ok(birth_date)
    }

    pub fn from_raw(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Aujourd'hui est admis, seul un jour strictement postérieur est refusé
    pub fn validate_at(&self, today: NaiveDate) -> Result<()> {
        if self.0 > today {
            return Err(DomainError::Validation {
                field: "birthday",
                reason: "Birthday cannot be in the future".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
