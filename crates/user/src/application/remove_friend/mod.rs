mod remove_friend_command;
mod remove_friend_use_case;

pub use remove_friend_command::RemoveFriendCommand;
pub use remove_friend_use_case::RemoveFriendUseCase;
