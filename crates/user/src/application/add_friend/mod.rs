mod add_friend_command;
mod add_friend_use_case;
mod add_friend_use_case_test;

pub use add_friend_command::AddFriendCommand;
pub use add_friend_use_case::AddFriendUseCase;
