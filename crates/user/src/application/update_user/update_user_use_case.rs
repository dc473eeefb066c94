// crates/user/src/application/update_user/update_user_use_case.rs

use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::update_user::UpdateUserCommand;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::validation::UserValidator;

pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    pub fn execute(&self, command: UpdateUserCommand) -> Result<User> {
        if command.params.is_empty() {
            debug!(user_id = %command.user_id, "empty user patch, nothing to merge");
            return self
                .user_repo
                .find_user_by_id(command.user_id)?
                .ok_or_not_found(command.user_id);
        }

        let validator = UserValidator::from_clock(self.clock.as_ref());
        let mut changed = false;

        // Lecture, validation partielle et fusion dans la même section critique.
        // Le repository vérifie l'existence avant d'appeler la fusion.
        let user = self
            .user_repo
            .update_user(command.user_id, &mut |user| {
                let changes = validator.validate_patch(&command.params)?;
                changed = user.apply_changes(changes);
                Ok(())
            })
            .inspect_err(|err| {
                if err.is_validation() {
                    warn!(user_id = %command.user_id, field = err.field(), "user update rejected: {}", err);
                }
            })?;

        info!(user_id = %user.id(), changed, "user updated");
        Ok(user)
    }
}
