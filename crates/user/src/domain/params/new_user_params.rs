// crates/user/src/domain/params/new_user_params.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload brut de création, tel que reçu. Rien n'est validé ici :
/// un champ obligatoire absent échoue comme un champ blanc.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewUserParams {
    pub email: Option<String>,
    pub login: Option<String>,
    pub display_name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl NewUserParams {
    pub fn new(email: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            login: Some(login.into()),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }
}
