pub mod builders;
pub mod entities;
pub mod params;
pub mod ranking;
pub mod repositories;
pub mod validation;
pub mod value_objects;
