// crates/user/src/domain/value_objects/display_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::Login;

/// Nom affiché. Aucune règle propre : un nom vide est remplacé par le login
/// au moment de l'écriture, jamais à la lecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retombe sur le login si le nom est absent ou blanc
    pub fn resolve(value: Option<&str>, login: &Login) -> Self {
        match value {
            Some(name) if !name.trim().is_empty() => Self(name.to_string()),
            _ => Self::from_login(login),
        }
    }

    pub fn from_login(login: &Login) -> Self {
        Self(login.as_str().to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}
