// crates/user/src/utils/mod.rs

use chrono::NaiveDate;
use shared_kernel::clock::{Clock, FixedClock};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::params::NewUserParams;
use crate::domain::repositories::UserRepository;
use crate::domain::validation::UserValidator;
use crate::infrastructure::memory::InMemoryUserRepository;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(today()))
}

pub fn user_params(login: &str) -> NewUserParams {
    NewUserParams::new(format!("{login}@mail.ru"), login)
}

pub fn user_repo() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

/// Insère directement un utilisateur valide, sans passer par un use case
pub fn seed_user(repo: &dyn UserRepository, login: &str) -> User {
    let draft = UserValidator::new(today())
        .validate_new(&user_params(login))
        .unwrap();
    repo.create_user(draft).unwrap()
}
