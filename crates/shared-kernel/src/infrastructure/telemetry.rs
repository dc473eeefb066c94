// crates/shared-kernel/src/infrastructure/telemetry.rs

use tracing_subscriber::EnvFilter;

use crate::errors::{DomainError, Result};

/// Installe le subscriber `tracing` global (fmt + EnvFilter).
/// `filter` suit la syntaxe RUST_LOG, ex: "info,user=debug".
pub fn init_tracing(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| {
        DomainError::Infrastructure(format!("Invalid log filter '{filter}': {e}"))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| DomainError::Infrastructure(format!("Tracing already initialized: {e}")))?;

    tracing::debug!(filter, "Tracing subscriber installed");
    Ok(())
}
