// crates/user/src/application/remove_friend/remove_friend_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::info;

use crate::application::remove_friend::RemoveFriendCommand;
use crate::domain::repositories::UserRepository;

pub struct RemoveFriendUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl RemoveFriendUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Retirer une amitié inexistante (ou avec soi-même) ne fait rien
    pub fn execute(&self, command: RemoveFriendCommand) -> Result<()> {
        let RemoveFriendCommand { user_id, friend_id } = command;

        let unlinked = self.user_repo.remove_friendship(user_id, friend_id)?;

        info!(%user_id, %friend_id, unlinked, "friend removed");
        Ok(())
    }
}
