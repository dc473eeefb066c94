// crates/user/src/domain/value_objects/user_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Reconstruction depuis un entier déjà attribué (chemin, payload)
    pub fn new_unchecked(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Identifier for UserId {
    fn from_raw(value: u64) -> Self {
        Self(value)
    }

    fn value(&self) -> u64 {
        self.0
    }
}

// --- CONVERSIONS ---

impl FromStr for UserId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "user_id",
                reason: format!("'{}' is not a valid user id", s),
            })
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_str() {
        assert_eq!("17".parse::<UserId>().unwrap(), UserId::new_unchecked(17));
        assert_eq!(" 3 ".parse::<UserId>().unwrap().as_u64(), 3);

        let err = "abc".parse::<UserId>().unwrap_err();
        assert_eq!(err.field(), Some("user_id"));
    }

    #[test]
    fn test_user_id_serializes_as_plain_integer() {
        let id = UserId::new_unchecked(5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
