// crates/user/src/application/create_user/create_user_use_case.rs

use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::create_user::CreateUserCommand;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::validation::UserValidator;

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    pub fn execute(&self, command: CreateUserCommand) -> Result<User> {
        // 1. VALIDATION COMPLÈTE (fail-fast)
        let draft = UserValidator::from_clock(self.clock.as_ref())
            .validate_new(&command.params)
            .inspect_err(|err| warn!(field = err.field(), "user creation rejected: {}", err))?;

        // 2. ATTRIBUTION DE L'ID ET PERSISTANCE
        let user = self.user_repo.create_user(draft)?;

        info!(user_id = %user.id(), login = %user.login(), "user created");
        Ok(user)
    }
}
