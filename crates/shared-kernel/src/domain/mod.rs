// crates/shared-kernel/src/domain/mod.rs

pub mod entities;
mod identifier;
pub mod store;
pub mod value_objects;

pub use identifier::{IdSequence, Identifier};
