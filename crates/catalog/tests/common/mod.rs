#![allow(dead_code)]

use catalog::{Catalog, CatalogConfig};
use chrono::NaiveDate;
use film::domain::entities::Film;
use film::domain::params::NewFilmParams;
use shared_kernel::clock::FixedClock;
use std::sync::Arc;
use user::domain::entities::User;
use user::domain::params::NewUserParams;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn catalog() -> Catalog {
    catalog_with(CatalogConfig::default())
}

pub fn catalog_with(config: CatalogConfig) -> Catalog {
    Catalog::with_clock(&config, Arc::new(FixedClock::on(today())))
}

pub fn user(catalog: &Catalog, login: &str) -> User {
    catalog
        .create_user(NewUserParams::new(format!("{login}@mail.ru"), login))
        .unwrap()
}

pub fn film(catalog: &Catalog, name: &str) -> Film {
    catalog.create_film(NewFilmParams::new(name, 100)).unwrap()
}

/// Vérifie `b ∈ a.friends ⇔ a ∈ b.friends` sur tout le store
pub fn assert_symmetric(catalog: &Catalog) {
    let users = catalog.list_users().unwrap();
    for user in &users {
        for friend_id in user.friends() {
            let friend = catalog.get_user(*friend_id).unwrap();
            assert!(
                friend.is_friend_of(user.id()),
                "{} lists {} as friend but not the other way round",
                user.id(),
                friend_id
            );
        }
    }
}
