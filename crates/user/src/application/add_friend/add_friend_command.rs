// crates/user/src/application/add_friend/add_friend_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct AddFriendCommand {
    pub user_id: UserId,
    pub friend_id: UserId,
}
