// crates/user/src/domain/repositories/user_repository.rs

use shared_kernel::errors::Result;

use crate::domain::entities::User;
use crate::domain::validation::UserDraft;
use crate::domain::value_objects::UserId;

/// Port de stockage des utilisateurs et du graphe d'amitié.
///
/// Chaque méthode est atomique vis-à-vis des autres : aucun appelant ne
/// peut observer un état intermédiaire (arête à moitié posée, fusion partielle).
/// Les `User` retournés portent leur projection d'amis à jour.
pub trait UserRepository: Send + Sync {
    /// Attribue un id neuf et stocke l'utilisateur
    fn create_user(&self, draft: UserDraft) -> Result<User>;

    fn find_user_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Tous les utilisateurs, dans l'ordre d'insertion
    fn list_users(&self) -> Result<Vec<User>>;

    /// Lecture-modification-écriture atomique.
    /// `NotFound` si l'id est inconnu, avant tout appel à `apply`.
    /// Si `apply` échoue, rien n'est écrit.
    fn update_user(
        &self,
        id: UserId,
        apply: &mut dyn FnMut(&mut User) -> Result<()>,
    ) -> Result<User>;

    /// Supprime l'utilisateur et toutes ses arêtes. `release` est appelé sous
    /// le même verrou, pour purger les références externes (likes).
    /// Retourne `false` si l'utilisateur n'existait pas.
    fn delete_user(
        &self,
        id: UserId,
        release: &mut dyn FnMut(&UserId) -> Result<()>,
    ) -> Result<bool>;

    /// Pose l'arête entre `user_id` et `friend_id` dans les deux sens.
    /// `NotFound` sur `user_id` d'abord, puis sur `friend_id`.
    /// Retourne `false` si les deux étaient déjà amis.
    fn add_friendship(&self, user_id: UserId, friend_id: UserId) -> Result<bool>;

    /// Mêmes règles d'existence que `add_friendship`
    fn remove_friendship(&self, user_id: UserId, friend_id: UserId) -> Result<bool>;

    /// Amis de l'utilisateur, triés par id croissant
    fn find_friends(&self, id: UserId) -> Result<Vec<User>>;

    /// Amis communs, triés par id croissant
    fn find_common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>>;

    /// Exécute `action` pendant que l'utilisateur est garanti présent
    /// (aucune suppression ne peut s'intercaler)
    fn with_existing_user(&self, id: UserId, action: &mut dyn FnMut() -> Result<()>) -> Result<()>;
}
