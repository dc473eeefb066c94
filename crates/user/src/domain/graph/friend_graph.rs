// crates/user/src/domain/graph/friend_graph.rs

use std::collections::{BTreeSet, HashMap};

use crate::domain::value_objects::UserId;

/// Graphe d'amitié non orienté, source unique de vérité.
///
/// Chaque arête est stockée dans les deux sens : `b ∈ adj[a] ⇔ a ∈ adj[b]`.
/// Le graphe ne connaît pas les utilisateurs ; l'existence est vérifiée par
/// le repository avant tout appel.
#[derive(Debug, Default, Clone)]
pub struct FriendGraph {
    adjacency: HashMap<UserId, BTreeSet<UserId>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relie `a` et `b`. Retourne `false` si l'arête existait déjà.
    /// L'appelant rejette `a == b` en amont.
    pub fn link(&mut self, a: UserId, b: UserId) -> bool {
        debug_assert_ne!(a, b);
        let inserted = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Retire l'arête dans les deux sens. Retourne `false` si elle n'existait pas.
    pub fn unlink(&mut self, a: UserId, b: UserId) -> bool {
        let removed = self.detach(a, b);
        self.detach(b, a);
        removed
    }

    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|friends| friends.contains(&b))
    }

    /// Amis de `id`, triés par id croissant
    pub fn friends_of(&self, id: UserId) -> BTreeSet<UserId> {
        self.adjacency.get(&id).cloned().unwrap_or_default()
    }

    /// Intersection des deux voisinages, triée par id croissant
    pub fn common_friends(&self, a: UserId, b: UserId) -> Vec<UserId> {
        match (self.adjacency.get(&a), self.adjacency.get(&b)) {
            (Some(left), Some(right)) => left.intersection(right).copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Supprime toutes les arêtes touchant `id`. Retourne les anciens amis.
    pub fn remove_user(&mut self, id: UserId) -> BTreeSet<UserId> {
        let friends = self.adjacency.remove(&id).unwrap_or_default();
        for friend in &friends {
            self.detach(*friend, id);
        }
        friends
    }

    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(a, friends)| {
            friends
                .iter()
                .all(|b| b != a && self.are_friends(*b, *a))
        })
    }

    fn detach(&mut self, from: UserId, to: UserId) -> bool {
        let Some(friends) = self.adjacency.get_mut(&from) else {
            return false;
        };
        let removed = friends.remove(&to);
        if friends.is_empty() {
            self.adjacency.remove(&from);
        }
        removed
    }
}
