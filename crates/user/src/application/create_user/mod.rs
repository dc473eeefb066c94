mod create_user_command;
mod create_user_use_case;
mod create_user_use_case_test;

pub use create_user_command::CreateUserCommand;
pub use create_user_use_case::CreateUserUseCase;
