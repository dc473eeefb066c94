// crates/user/src/application/add_friend/add_friend_use_case.rs

use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::add_friend::AddFriendCommand;
use crate::domain::repositories::UserRepository;

pub struct AddFriendUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl AddFriendUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn execute(&self, command: AddFriendCommand) -> Result<()> {
        let AddFriendCommand { user_id, friend_id } = command;

        // Un utilisateur inconnu reste NotFound, même ami avec lui-même
        if user_id == friend_id {
            self.user_repo.with_existing_user(user_id, &mut || Ok(()))?;
            warn!(%user_id, field = "friend_id", "self-friendship rejected");
            return Err(DomainError::validation(
                "friend_id",
                "A user cannot befriend themselves",
            ));
        }

        let linked = self.user_repo.add_friendship(user_id, friend_id)?;

        info!(%user_id, %friend_id, linked, "friend added");
        Ok(())
    }
}
