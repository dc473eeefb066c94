mod catalog;
mod config;

pub use catalog::Catalog;
pub use config::CatalogConfig;
