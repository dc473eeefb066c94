// crates/user/src/application/get_common_friends/get_common_friends_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::application::get_common_friends::GetCommonFriendsCommand;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;

pub struct GetCommonFriendsUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetCommonFriendsUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn execute(&self, command: GetCommonFriendsCommand) -> Result<Vec<User>> {
        let GetCommonFriendsCommand { user_id, other_id } = command;

        let common = self.user_repo.find_common_friends(user_id, other_id)?;
        debug!(%user_id, %other_id, count = common.len(), "common friends");
        Ok(common)
    }
}
