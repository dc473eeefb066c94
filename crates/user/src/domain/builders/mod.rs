mod user_builder;

pub use user_builder::UserBuilder;
