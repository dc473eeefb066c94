mod user_references;
mod user_repository;

pub use user_references::{NoUserReferences, UserReferences};
pub use user_repository::UserRepository;
