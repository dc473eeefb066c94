// crates/user/src/application/remove_friend/remove_friend_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct RemoveFriendCommand {
    pub user_id: UserId,
    pub friend_id: UserId,
}
