// crates/user/src/application/delete_user/delete_user_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}
