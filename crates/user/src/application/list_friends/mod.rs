mod list_friends_command;
mod list_friends_use_case;
mod list_friends_use_case_test;

pub use list_friends_command::ListFriendsCommand;
pub use list_friends_use_case::ListFriendsUseCase;
