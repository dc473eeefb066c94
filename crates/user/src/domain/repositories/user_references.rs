// crates/user/src/domain/repositories/user_references.rs

use shared_kernel::errors::Result;

use crate::domain::value_objects::UserId;

/// Références vers un utilisateur détenues hors de ce crate
/// (likes de films). Purgées lors de la suppression de l'utilisateur.
pub trait UserReferences: Send + Sync {
    fn release_user(&self, id: UserId) -> Result<()>;
}

/// Aucune référence externe
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUserReferences;

impl UserReferences for NoUserReferences {
    fn release_user(&self, _id: UserId) -> Result<()> {
        Ok(())
    }
}
