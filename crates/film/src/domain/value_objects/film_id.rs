// crates/film/src/domain/value_objects/film_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(u64);

impl FilmId {
    pub fn new_unchecked(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Identifier for FilmId {
    fn from_raw(value: u64) -> Self {
        Self(value)
    }

    fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for FilmId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation("film_id", format!("'{}' is not a valid film id", s)))
    }
}

impl From<FilmId> for u64 {
    fn from(id: FilmId) -> Self {
        id.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
