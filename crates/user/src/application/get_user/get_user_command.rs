// crates/user/src/application/get_user/get_user_command.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy)]
pub struct GetUserCommand {
    pub user_id: UserId,
}
