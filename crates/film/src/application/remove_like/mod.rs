mod remove_like_command;
mod remove_like_use_case;

pub use remove_like_command::RemoveLikeCommand;
pub use remove_like_use_case::RemoveLikeUseCase;
