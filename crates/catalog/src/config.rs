// crates/catalog/src/config.rs

use film::domain::ranking::DEFAULT_POPULAR_COUNT;
use shared_kernel::errors::{DomainError, Result};

pub const POPULAR_COUNT_VAR: &str = "CATALOG_DEFAULT_POPULAR_COUNT";
pub const LOG_FILTER_VAR: &str = "CATALOG_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub default_popular_count: usize,
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_popular_count: DEFAULT_POPULAR_COUNT,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Variables absentes : valeurs par défaut. Variables invalides : erreur.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(POPULAR_COUNT_VAR) {
            config.default_popular_count = raw.trim().parse().map_err(|_| {
                DomainError::Infrastructure(format!("Invalid {}: '{}'", POPULAR_COUNT_VAR, raw))
            })?;
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            if filter.trim().is_empty() {
                return Err(DomainError::Infrastructure(format!(
                    "{} cannot be blank",
                    LOG_FILTER_VAR
                )));
            }
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn with_default_popular_count(mut self, count: usize) -> Self {
        self.default_popular_count = count;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
