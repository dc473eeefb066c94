// crates/film/src/utils/mod.rs

use chrono::NaiveDate;
use std::sync::Arc;
use user::domain::entities::User;
use user::domain::params::NewUserParams;
use user::domain::repositories::UserRepository;
use user::domain::validation::UserValidator;
use user::infrastructure::memory::InMemoryUserRepository;

use crate::domain::entities::Film;
use crate::domain::params::NewFilmParams;
use crate::domain::repositories::FilmRepository;
use crate::domain::validation::FilmValidator;
use crate::infrastructure::memory::InMemoryFilmRepository;

pub fn film_repo() -> Arc<InMemoryFilmRepository> {
    Arc::new(InMemoryFilmRepository::new())
}

pub fn user_repo() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

pub fn film_params(name: &str) -> NewFilmParams {
    NewFilmParams::new(name, 100)
        .with_description("adipisicing")
        .with_release_date(NaiveDate::from_ymd_opt(1967, 3, 25).unwrap())
}

pub fn seed_film(repo: &dyn FilmRepository, name: &str) -> Film {
    let draft = FilmValidator::new().validate_new(&film_params(name)).unwrap();
    repo.create_film(draft).unwrap()
}

pub fn seed_user(repo: &dyn UserRepository, login: &str) -> User {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let draft = UserValidator::new(today)
        .validate_new(&NewUserParams::new(format!("{login}@mail.ru"), login))
        .unwrap();
    repo.create_user(draft).unwrap()
}
