// crates/user/src/application/get_common_friends/get_common_friends_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct GetCommonFriendsCommand {
    pub user_id: UserId,
    pub other_id: UserId,
}
