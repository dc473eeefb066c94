// crates/user/src/domain/entities/user.rs

use serde::Serialize;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use std::collections::BTreeSet;

use crate::domain::builders::UserBuilder;
use crate::domain::validation::UserChanges;
use crate::domain::value_objects::{BirthDate, DisplayName, Email, Login, UserId};

/// Agrégat User
///
/// `friends` est une projection en lecture : les amitiés vivent dans le
/// `FriendGraph` du repository, qui l'attache à chaque lecture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: Email,
    login: Login,
    display_name: DisplayName,
    birthday: Option<BirthDate>,
    friends: BTreeSet<UserId>,
}

impl User {
    pub fn builder(id: UserId, email: Email, login: Login) -> UserBuilder {
        UserBuilder::new(id, email, login)
    }

    pub(crate) fn from_parts(
        id: UserId,
        email: Email,
        login: Login,
        display_name: DisplayName,
        birthday: Option<BirthDate>,
    ) -> Self {
        Self {
            id,
            email,
            login,
            display_name,
            birthday,
            friends: BTreeSet::new(),
        }
    }

    // ==========================================
    // FUSION PARTIELLE
    // ==========================================

    /// Écrase uniquement les champs fournis (déjà validés), puis applique le
    /// repli du nom affiché sur le login. Les amitiés ne sont jamais touchées.
    /// Retourne `true` si au moins un champ a changé.
    pub fn apply_changes(&mut self, changes: UserChanges) -> bool {
        let mut changed = false;

        if let Some(email) = changes.email {
            changed |= self.change_email(email);
        }
        if let Some(login) = changes.login {
            changed |= self.change_login(login);
        }
        if let Some(display_name) = changes.display_name {
            changed |= self.change_display_name(display_name);
        }
        if let Some(birthday) = changes.birthday {
            changed |= self.change_birthday(birthday);
        }

        changed | self.ensure_display_name()
    }

    pub fn change_email(&mut self, new_email: Email) -> bool {
        if self.email == new_email {
            return false;
        }
        self.email = new_email;
        true
    }

    pub fn change_login(&mut self, new_login: Login) -> bool {
        if self.login == new_login {
            return false;
        }
        self.login = new_login;
        true
    }

    pub fn change_display_name(&mut self, new_name: DisplayName) -> bool {
        if self.display_name == new_name {
            return false;
        }
        self.display_name = new_name;
        true
    }

    pub fn change_birthday(&mut self, new_date: BirthDate) -> bool {
        if self.birthday == Some(new_date) {
            return false;
        }
        self.birthday = Some(new_date);
        true
    }

    /// Un nom affiché blanc est remplacé par le login courant
    fn ensure_display_name(&mut self) -> bool {
        if !self.display_name.is_blank() {
            return false;
        }
        self.display_name = DisplayName::from_login(&self.login);
        true
    }

    // ==========================================
    // PROJECTION DES AMITIÉS (Repository)
    // ==========================================

    pub(crate) fn with_friends(mut self, friends: BTreeSet<UserId>) -> Self {
        self.friends = friends;
        self
    }

    pub(crate) fn detached(mut self) -> Self {
        self.friends.clear();
        self
    }

    // ==========================================
    // GETTERS
    // ==========================================

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn birthday(&self) -> Option<BirthDate> {
        self.birthday
    }

    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    pub fn is_friend_of(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }
}

impl EntityMetadata for User {
    fn entity_name() -> &'static str {
        "User"
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
