// crates/user/src/domain/value_objects/login.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login(String);

impl Login {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let login = Self(value.into());
        login.validate()?;
        Ok(login)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Login {
    fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "login",
                reason: "Login cannot be blank".into(),
            });
        }

        if self.0.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation {
                field: "login",
                reason: "Login cannot contain whitespace".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Login {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Login> for String {
    fn from(login: Login) -> Self {
        login.0
    }
}

impl std::fmt::Display for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
