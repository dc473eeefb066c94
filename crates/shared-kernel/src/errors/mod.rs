// crates/shared-kernel/src/errors/mod.rs

mod error;
mod result;

pub use error::DomainError;
pub use result::{internal_err, Result};
