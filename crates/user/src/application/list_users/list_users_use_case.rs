// crates/user/src/application/list_users/list_users_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Instantané de tous les utilisateurs, dans l'ordre de création
    pub fn execute(&self) -> Result<Vec<User>> {
        let users = self.user_repo.list_users()?;
        debug!(count = users.len(), "list users");
        Ok(users)
    }
}
