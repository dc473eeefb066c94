// crates/user/src/application/list_friends/list_friends_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct ListFriendsCommand {
    pub user_id: UserId,
}
