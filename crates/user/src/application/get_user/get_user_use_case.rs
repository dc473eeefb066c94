// crates/user/src/application/get_user/get_user_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::application::get_user::GetUserCommand;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;

pub struct GetUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn execute(&self, command: GetUserCommand) -> Result<User> {
        debug!(user_id = %command.user_id, "get user");

        self.user_repo
            .find_user_by_id(command.user_id)?
            .ok_or_not_found(command.user_id)
    }
}
