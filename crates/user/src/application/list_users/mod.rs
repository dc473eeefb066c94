mod list_users_use_case;

pub use list_users_use_case::ListUsersUseCase;
