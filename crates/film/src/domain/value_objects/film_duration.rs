// crates/film/src/domain/value_objects/film_duration.rs

use serde::Serialize;
use shared_kernel::errors::{DomainError, Result};

/// Durée en minutes, strictement positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FilmDuration(u32);

impl FilmDuration {
    /// Le payload transporte un entier signé : 0 et les négatifs sont refusés ici
    pub fn try_new(minutes: i64) -> Result<Self> {
        if minutes <= 0 {
            return Err(DomainError::Validation {
                field: "duration",
                reason: "Duration must be positive".into(),
            });
        }

        u32::try_from(minutes).map(Self).map_err(|_| DomainError::Validation {
            field: "duration",
            reason: format!("Duration of {} minutes is out of range", minutes),
        })
    }

    pub fn from_raw(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}
