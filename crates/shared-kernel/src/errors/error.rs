// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Un champ du payload viole une règle de validation.
    /// L'appelant s'appuie sur `field`, jamais sur le texte de `reason`.
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Une relation référence un id absent de son store.
    /// Inatteignable tant que les invariants tiennent : signale un bug, pas une erreur utilisateur.
    #[error("Internal domain error: {0}")]
    Internal(String),

    /// Erreur de démarrage (configuration, télémétrie), jamais levée par une opération du domaine
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Nom du champ fautif pour une erreur de validation
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
