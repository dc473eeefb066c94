pub mod add_friend;
pub mod create_user;
pub mod delete_user;
pub mod get_common_friends;
pub mod get_user;
pub mod list_friends;
pub mod list_users;
pub mod remove_friend;
pub mod update_user;
