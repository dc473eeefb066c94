// crates/user/src/application/create_user/create_user_command.rs

use serde::Deserialize;

use crate::domain::params::NewUserParams;

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CreateUserCommand {
    pub params: NewUserParams,
}

impl From<NewUserParams> for CreateUserCommand {
    fn from(params: NewUserParams) -> Self {
        Self { params }
    }
}
