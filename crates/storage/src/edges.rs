//! Sharded in-memory edge store
//!
//! Reference [`GraphStore`] backend built on DashMap.
//!
//! # Design
//!
//! - `edges`: DashMap keyed by the codec's edge key. The key is the unique
//!   constraint: insert and delete go through the shard entry, so racing
//!   writers on the same pair are serialized by the shard lock.
//! - `incidence`: DashMap from user to the set of neighbors (FxHashSet).
//!   Updated while the `edges` entry for the pair is held, so it never
//!   disagrees with `edges` once a write returns.
//!
//! Lock order is always `edges` shard, then `incidence` shard. Readers of
//! `incidence` never touch `edges`, so the two cannot deadlock.
//!
//! # Example
//!
//! ```ignore
//! use socialgraph_storage::MemoryGraphStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryGraphStore::new());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHashSet;
use serde::Serialize;
use socialgraph_core::codec;
use socialgraph_core::{
    DeleteOutcome, Edge, GraphStore, InsertOutcome, StoreError, StoreResult, UserId,
};

/// A stored edge with the store version at which it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    /// The canonical edge.
    pub edge: Edge,
    /// Store version assigned on insert.
    pub version: u64,
}

/// In-memory edge store with store-enforced uniqueness.
pub struct MemoryGraphStore {
    /// Primary rows: edge key -> record
    edges: DashMap<String, EdgeRecord>,
    /// Adjacency: user -> neighbors
    incidence: DashMap<UserId, FxHashSet<UserId>>,
    /// Bumped on every successful write
    version: AtomicU64,
}

impl MemoryGraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            edges: DashMap::new(),
            incidence: DashMap::new(),
            version: AtomicU64::new(0),
        }
    }

    /// Get current version
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    #[inline]
    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Number of stored edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edges are stored
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of users with at least one edge
    pub fn connected_user_count(&self) -> usize {
        self.incidence.len()
    }

    /// Look up the stored record for an edge
    pub fn get(&self, edge: &Edge) -> Option<EdgeRecord> {
        self.edges
            .get(&codec::edge_key(edge))
            .map(|r| r.value().clone())
    }

    /// All stored edges, sorted
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges.iter().map(|r| r.edge.clone()).collect();
        edges.sort();
        edges
    }

    fn link(&self, user: &UserId, neighbor: &UserId) {
        self.incidence
            .entry(user.clone())
            .or_default()
            .insert(neighbor.clone());
    }

    fn unlink(&self, user: &UserId, neighbor: &UserId) {
        if let Entry::Occupied(mut slot) = self.incidence.entry(user.clone()) {
            slot.get_mut().remove(neighbor);
            if slot.get().is_empty() {
                slot.remove();
            }
        }
    }
}

impl GraphStore for MemoryGraphStore {
    fn insert_edge(&self, edge: &Edge) -> StoreResult<InsertOutcome> {
        match self.edges.entry(codec::edge_key(edge)) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                self.link(edge.low(), edge.high());
                self.link(edge.high(), edge.low());
                let version = self.next_version();
                slot.insert(EdgeRecord {
                    edge: edge.clone(),
                    version,
                });
                tracing::trace!(target: "socialgraph::storage", %edge, version, "edge inserted");
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    fn delete_edge(&self, edge: &Edge) -> StoreResult<DeleteOutcome> {
        match self.edges.entry(codec::edge_key(edge)) {
            Entry::Vacant(_) => Ok(DeleteOutcome::NotFound),
            Entry::Occupied(slot) => {
                self.unlink(edge.low(), edge.high());
                self.unlink(edge.high(), edge.low());
                slot.remove();
                let version = self.next_version();
                tracing::trace!(target: "socialgraph::storage", %edge, version, "edge deleted");
                Ok(DeleteOutcome::Deleted)
            }
        }
    }

    fn contains_edge(&self, edge: &Edge) -> StoreResult<bool> {
        Ok(self.edges.contains_key(&codec::edge_key(edge)))
    }

    fn find_edges_incident(&self, user: &UserId) -> StoreResult<Vec<Edge>> {
        let Some(neighbors) = self.incidence.get(user) else {
            return Ok(Vec::new());
        };
        neighbors
            .iter()
            .map(|neighbor| {
                codec::canonicalize(user, neighbor).map_err(|e| StoreError::Corrupt {
                    key: user.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl Default for MemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryGraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGraphStore")
            .field("edges", &self.len())
            .field("connected_users", &self.connected_user_count())
            .field("version", &self.version())
            .finish()
    }
}
