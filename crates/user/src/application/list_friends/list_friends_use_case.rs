// crates/user/src/application/list_friends/list_friends_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::application::list_friends::ListFriendsCommand;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;

pub struct ListFriendsUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ListFriendsUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn execute(&self, command: ListFriendsCommand) -> Result<Vec<User>> {
        let friends = self.user_repo.find_friends(command.user_id)?;
        debug!(user_id = %command.user_id, count = friends.len(), "list friends");
        Ok(friends)
    }
}
