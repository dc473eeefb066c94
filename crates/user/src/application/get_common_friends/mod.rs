mod get_common_friends_command;
mod get_common_friends_use_case;

pub use get_common_friends_command::GetCommonFriendsCommand;
pub use get_common_friends_use_case::GetCommonFriendsUseCase;
