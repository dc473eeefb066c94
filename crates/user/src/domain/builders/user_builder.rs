// crates/user/src/domain/builders/user_builder.rs

use crate::domain::entities::User;
use crate::domain::value_objects::{BirthDate, DisplayName, Email, Login, UserId};

pub struct UserBuilder {
    id: UserId,
    email: Email,
    login: Login,
    display_name: Option<DisplayName>,
    birthday: Option<BirthDate>,
}

impl UserBuilder {
    /// Initialise les données obligatoires d'un nouvel utilisateur
    pub fn new(id: UserId, email: Email, login: Login) -> Self {
        Self {
            id,
            email,
            login,
            display_name: None,
            birthday: None,
        }
    }

    // --- SETTERS ---

    pub fn with_display_name(mut self, display_name: DisplayName) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn with_birthday(mut self, birthday: BirthDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_optional_birthday(mut self, birthday: Option<BirthDate>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Finalise l'utilisateur. Sans nom affiché (ou nom blanc), le login est
    /// recopié : le repli est figé à l'écriture.
    pub fn build(self) -> User {
        let display_name = match self.display_name {
            Some(name) if !name.is_blank() => name,
            _ => DisplayName::from_login(&self.login),
        };

        User::from_parts(self.id, self.email, self.login, display_name, self.birthday)
    }
}
