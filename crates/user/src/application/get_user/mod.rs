mod get_user_command;
mod get_user_use_case;

pub use get_user_command::GetUserCommand;
pub use get_user_use_case::GetUserUseCase;
