mod user_validator;

pub use user_validator::{UserChanges, UserDraft, UserValidator};
