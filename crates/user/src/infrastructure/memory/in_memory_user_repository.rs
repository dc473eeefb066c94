// crates/user/src/infrastructure/memory/in_memory_user_repository.rs

use parking_lot::RwLock;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::store::EntityTable;
use shared_kernel::domain::IdSequence;
use shared_kernel::errors::{internal_err, Result};

use crate::domain::entities::User;
use crate::domain::graph::FriendGraph;
use crate::domain::repositories::UserRepository;
use crate::domain::validation::UserDraft;
use crate::domain::value_objects::UserId;

/// Table des utilisateurs et graphe d'amitié, sous un même verrou :
/// une arête ne peut jamais pointer vers un utilisateur supprimé.
#[derive(Debug, Default)]
struct UserTable {
    users: EntityTable<User>,
    friendships: FriendGraph,
}

impl UserTable {
    fn ensure_exists(&self, id: UserId) -> Result<()> {
        if self.users.contains(&id) {
            Ok(())
        } else {
            Err(User::not_found(id))
        }
    }

    /// Attache la projection d'amis à une copie de la ligne stockée
    fn hydrate(&self, user: &User) -> User {
        user.clone().with_friends(self.friendships.friends_of(user.id()))
    }

    fn resolve_all(&self, ids: impl IntoIterator<Item = UserId>) -> Result<Vec<User>> {
        ids.into_iter()
            .map(|id| {
                self.users
                    .find(&id)
                    .map(|user| self.hydrate(user))
                    .ok_or_else(|| {
                        internal_err(format!("friendship points to missing user {}", id))
                    })
            })
            .collect()
    }
}

pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_sequence(IdSequence::new())
    }

    pub fn with_sequence(sequence: IdSequence) -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: EntityTable::with_sequence(sequence),
                friendships: FriendGraph::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invariant de symétrie du graphe, exposé pour les tests de charge
    pub fn friendships_are_symmetric(&self) -> bool {
        self.table.read().friendships.is_symmetric()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create_user(&self, draft: UserDraft) -> Result<User> {
        let mut table = self.table.write();
        table.users.add(|id| draft.into_user(id))
    }

    fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let table = self.table.read();
        Ok(table.users.find(&id).map(|user| table.hydrate(user)))
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let table = self.table.read();
        Ok(table.users.iter().map(|user| table.hydrate(user)).collect())
    }

    fn update_user(
        &self,
        id: UserId,
        apply: &mut dyn FnMut(&mut User) -> Result<()>,
    ) -> Result<User> {
        let mut table = self.table.write();

        let mut working = table.users.get_by_id(&id)?.clone();
        apply(&mut working)?;

        let stored = table.users.update(working.detached())?;
        Ok(table.hydrate(&stored))
    }

    fn delete_user(
        &self,
        id: UserId,
        release: &mut dyn FnMut(&UserId) -> Result<()>,
    ) -> Result<bool> {
        let mut table = self.table.write();
        if !table.users.contains(&id) {
            return Ok(false);
        }

        release(&id)?;
        table.friendships.remove_user(id);
        Ok(table.users.delete(&id))
    }

    fn add_friendship(&self, user_id: UserId, friend_id: UserId) -> Result<bool> {
        let mut table = self.table.write();
        table.ensure_exists(user_id)?;
        table.ensure_exists(friend_id)?;

        Ok(table.friendships.link(user_id, friend_id))
    }

    fn remove_friendship(&self, user_id: UserId, friend_id: UserId) -> Result<bool> {
        let mut table = self.table.write();
        table.ensure_exists(user_id)?;
        table.ensure_exists(friend_id)?;

        Ok(table.friendships.unlink(user_id, friend_id))
    }

    fn find_friends(&self, id: UserId) -> Result<Vec<User>> {
        let table = self.table.read();
        table.ensure_exists(id)?;

        table.resolve_all(table.friendships.friends_of(id))
    }

    fn find_common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>> {
        let table = self.table.read();
        table.ensure_exists(id)?;
        table.ensure_exists(other_id)?;

        table.resolve_all(table.friendships.common_friends(id, other_id))
    }

    fn with_existing_user(&self, id: UserId, action: &mut dyn FnMut() -> Result<()>) -> Result<()> {
        let table = self.table.read();
        table.ensure_exists(id)?;
        action()
    }
}
