// crates/user/src/application/update_user/update_user_command.rs

use crate::domain::params::PatchUserParams;
use crate::domain::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub params: PatchUserParams,
}
