// crates/shared-kernel/src/domain/store/mod.rs

mod entity_table;

pub use entity_table::EntityTable;
