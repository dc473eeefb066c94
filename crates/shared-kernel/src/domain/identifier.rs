// crates/shared-kernel/src/domain/identifier.rs

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{internal_err, Result};

/// Trait pour uniformiser les IDs à travers le système.
/// Un id est un entier stable, attribué une seule fois par son store.
pub trait Identifier:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    fn from_raw(value: u64) -> Self;
    fn value(&self) -> u64;
}

/// Allocateur d'identifiants : une séquence par type d'entité.
///
/// Strictement croissante à partir de 1, jamais rejouée (même après suppression).
/// L'incrément est atomique, plusieurs `add` concurrents obtiennent des ids distincts.
/// `u64::MAX` est le dernier id attribuable, la séquence est ensuite épuisée.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::FIRST)
    }

    /// Reprise d'une séquence déjà avancée (ex: rechargement d'un jeu de données)
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next<I: Identifier>(&self) -> Result<I> {
        // 0 n'est jamais un id : il marque la séquence épuisée après u64::MAX
        let issued = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| match current {
                0 => None,
                u64::MAX => Some(0),
                _ => Some(current + 1),
            })
            .map_err(|_| internal_err("identifier sequence exhausted"))?;

        Ok(I::from_raw(issued))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
