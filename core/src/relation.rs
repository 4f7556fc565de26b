//! Relations between entities.
//!
//! A relation is stored once, on its owning side, as a foreign-key column.
//! The inverse side (`Department.users`) is metadata only: it can be joined
//! through, and [`InverseIndex`] derives the inverse collection from owner
//! values on demand, so reassigning an owner can never leave a stale entry
//! in another target's collection.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use hashbrown::HashMap;

use crate::entity::Entity;
use crate::sql::{SQL, Token};

/// Which side of a relation a path describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Owning side: the source row holds the foreign key.
    ManyToOne,
    /// Inverse side: the target rows hold the foreign key.
    OneToMany,
}

/// A relation path from source entity `S` to target entity `T`.
///
/// Joining a relation matches `"source"."source_column"` against
/// `"target"."target_column"`, with the target alias supplied at join time.
pub struct Relation<S, T> {
    source_alias: &'static str,
    source_column: &'static str,
    target_column: &'static str,
    kind: RelationKind,
    _marker: PhantomData<fn() -> (S, T)>,
}

impl<S, T> Relation<S, T> {
    pub const fn new(
        source_alias: &'static str,
        source_column: &'static str,
        target_column: &'static str,
        kind: RelationKind,
    ) -> Self {
        Self {
            source_alias,
            source_column,
            target_column,
            kind,
            _marker: PhantomData,
        }
    }

    pub const fn source_alias(&self) -> &'static str {
        self.source_alias
    }

    pub const fn kind(&self) -> RelationKind {
        self.kind
    }
}

impl<S, T: Entity> Relation<S, T> {
    /// The ON condition joining this relation to `target`.
    pub fn on(&self, target: &T) -> SQL {
        SQL::column(self.source_alias, self.source_column)
            .push(Token::EQ)
            .append(SQL::column(target.alias(), self.target_column))
    }
}

impl<S, T> Clone for Relation<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Relation<S, T> {}

impl<S, T> fmt::Debug for Relation<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("source_alias", &self.source_alias)
            .field("source_column", &self.source_column)
            .field("target_column", &self.target_column)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The inverse view of a many-to-one relation, derived from owner values.
///
/// ```ignore
/// let users_by_department = InverseIndex::build(&users, |u| u.department_id);
/// let members = users_by_department.get(&dept1.id);
/// ```
#[derive(Debug)]
pub struct InverseIndex<'a, K, O> {
    owners: HashMap<K, Vec<&'a O>>,
}

impl<'a, K: Eq + Hash, O> InverseIndex<'a, K, O> {
    /// Groups `owners` by the key their relation points at. Owners whose key
    /// is absent are not indexed. Owners keep their input order.
    pub fn build<I, F>(owners: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a O>,
        F: Fn(&O) -> Option<K>,
    {
        let mut index: HashMap<K, Vec<&'a O>> = HashMap::new();
        for owner in owners {
            if let Some(k) = key(owner) {
                index.entry(k).or_default().push(owner);
            }
        }
        Self { owners: index }
    }

    /// The owners pointing at `target`; empty if none do.
    pub fn get(&self, target: &K) -> &[&'a O] {
        self.owners.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct targets with at least one owner.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
