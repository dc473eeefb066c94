// crates/shared-kernel/src/infrastructure/mod.rs

pub mod telemetry;
