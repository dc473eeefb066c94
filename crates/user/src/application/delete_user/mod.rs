mod delete_user_command;
mod delete_user_use_case;

pub use delete_user_command::DeleteUserCommand;
pub use delete_user_use_case::DeleteUserUseCase;
