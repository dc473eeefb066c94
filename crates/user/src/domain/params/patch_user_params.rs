// crates/user/src/domain/params/patch_user_params.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mise à jour partielle : `None` signifie "inchangé".
/// Une clé absente et un `null` explicite se désérialisent tous deux en `None`,
/// un champ omis ne peut donc jamais effacer une valeur stockée.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchUserParams {
    pub email: Option<String>,
    pub login: Option<String>,
    pub display_name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl PatchUserParams {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.login.is_none()
            && self.display_name.is_none()
            && self.birthday.is_none()
    }
}
