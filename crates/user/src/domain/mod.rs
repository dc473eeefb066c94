pub mod builders;
pub mod entities;
pub mod graph;
pub mod params;
pub mod repositories;
pub mod validation;
pub mod value_objects;
