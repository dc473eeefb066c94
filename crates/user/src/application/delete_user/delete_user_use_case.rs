// crates/user/src/application/delete_user/delete_user_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::delete_user::DeleteUserCommand;
use crate::domain::repositories::{UserReferences, UserRepository};

/// Suppression en cascade : arêtes d'amitié et références externes (likes)
/// disparaissent avec l'utilisateur, sous le verrou d'écriture des utilisateurs.
pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    references: Arc<dyn UserReferences>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, references: Arc<dyn UserReferences>) -> Self {
        Self {
            user_repo,
            references,
        }
    }

    /// `false` si l'utilisateur n'existait pas
    pub fn execute(&self, command: DeleteUserCommand) -> Result<bool> {
        let deleted = self
            .user_repo
            .delete_user(command.user_id, &mut |id| self.references.release_user(*id))?;

        if deleted {
            info!(user_id = %command.user_id, "user deleted");
        } else {
            debug!(user_id = %command.user_id, "delete skipped, unknown user");
        }
        Ok(deleted)
    }
}
