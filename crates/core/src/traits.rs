//! Storage contracts consumed by the engine.
//!
//! The engine reaches vertices and edges only through these traits and
//! never caches what they return across calls. Implementations must be
//! safe to share between threads; every method is a potential blocking
//! point.

use std::collections::{BTreeSet, HashMap};

use crate::error::StoreResult;
use crate::types::{Edge, UserId, UserProfile};

/// Outcome of [`GraphStore::insert_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The edge was stored.
    Inserted,
    /// The edge was already present; nothing changed.
    AlreadyExists,
}

/// Outcome of [`GraphStore::delete_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The edge was removed.
    Deleted,
    /// The edge was not present; nothing changed.
    NotFound,
}

/// Persistence backend for edges.
///
/// # Uniqueness
///
/// `insert_edge` must enforce at most one row per canonical edge, atomically.
/// Two concurrent inserts of the same edge must yield exactly one
/// `Inserted`; likewise two concurrent deletes yield exactly one `Deleted`.
pub trait GraphStore: Send + Sync {
    /// Store a canonical edge.
    fn insert_edge(&self, edge: &Edge) -> StoreResult<InsertOutcome>;

    /// Remove a canonical edge.
    fn delete_edge(&self, edge: &Edge) -> StoreResult<DeleteOutcome>;

    /// Check whether a canonical edge is stored.
    fn contains_edge(&self, edge: &Edge) -> StoreResult<bool>;

    /// All edges with `user` as an endpoint, in any order.
    fn find_edges_incident(&self, user: &UserId) -> StoreResult<Vec<Edge>>;
}

/// External user directory.
pub trait UserStore: Send + Sync {
    /// Check whether a user exists.
    fn exists(&self, user: &UserId) -> StoreResult<bool>;

    /// Resolve many users in one round-trip.
    ///
    /// Unknown identifiers are simply absent from the returned map.
    fn find_many(&self, users: &BTreeSet<UserId>) -> StoreResult<HashMap<UserId, UserProfile>>;
}
