mod add_like_command;
mod add_like_use_case;

pub use add_like_command::AddLikeCommand;
pub use add_like_use_case::AddLikeUseCase;
