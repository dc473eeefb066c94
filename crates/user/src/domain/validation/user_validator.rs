// crates/user/src/domain/validation/user_validator.rs

use chrono::NaiveDate;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::domain::builders::UserBuilder;
use crate::domain::entities::User;
use crate::domain::params::{NewUserParams, PatchUserParams};
use crate::domain::value_objects::{BirthDate, DisplayName, Email, Login, UserId};

/// Utilisateur entièrement validé, pas encore identifié
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub email: Email,
    pub login: Login,
    pub display_name: DisplayName,
    pub birthday: Option<BirthDate>,
}

impl UserDraft {
    pub fn into_user(self, id: UserId) -> User {
        UserBuilder::new(id, self.email, self.login)
            .with_display_name(self.display_name)
            .with_optional_birthday(self.birthday)
            .build()
    }
}

/// Champs validés d'une mise à jour partielle, prêts à être fusionnés
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub login: Option<Login>,
    pub display_name: Option<DisplayName>,
    pub birthday: Option<BirthDate>,
}

/// Règles de validation d'un utilisateur, pour une date du jour donnée.
///
/// Ordre fixe : email, login, birthday. Le premier échec est retourné.
#[derive(Debug, Clone, Copy)]
pub struct UserValidator {
    today: NaiveDate,
}

impl UserValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Une seule lecture d'horloge par validation
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    /// Validation complète (création)
    pub fn validate_new(&self, params: &NewUserParams) -> Result<UserDraft> {
        let email = Email::try_new(params.email.clone().unwrap_or_default())?;
        let login = Login::try_new(params.login.clone().unwrap_or_default())?;
        let birthday = params
            .birthday
            .map(|date| BirthDate::try_new(date, self.today))
            .transpose()?;
        let display_name = DisplayName::resolve(params.display_name.as_deref(), &login);

        Ok(UserDraft {
            email,
            login,
            display_name,
            birthday,
        })
    }

    /// Validation partielle (mise à jour) : seuls les champs présents passent
    /// leur règle. Le nom affiché n'a pas de règle, son repli se fait à la fusion.
    pub fn validate_patch(&self, params: &PatchUserParams) -> Result<UserChanges> {
        let email = params.email.clone().map(Email::try_new).transpose()?;
        let login = params.login.clone().map(Login::try_new).transpose()?;
        let birthday = params
            .birthday
            .map(|date| BirthDate::try_new(date, self.today))
            .transpose()?;
        let display_name = params.display_name.clone().map(DisplayName::new);

        Ok(UserChanges {
            email,
            login,
            display_name,
            birthday,
        })
    }
}
