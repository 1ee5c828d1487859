//! Fixtures shared by the graph module tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use socialgraph_core::{
    DeleteOutcome, Edge, GraphStore, InsertOutcome, StoreError, StoreResult, UserId,
    UserProfile, UserStore,
};
use socialgraph_storage::{MemoryGraphStore, MemoryUserStore};

use super::GraphService;
use crate::config::GraphConfig;

pub(crate) struct Fixture {
    pub service: GraphService,
    pub edges: Arc<MemoryGraphStore>,
    pub users: Arc<MemoryUserStore>,
}

pub(crate) fn id(s: &str) -> UserId {
    UserId::from(s)
}

/// Register every endpoint (display name is the uppercased id) and store the edges.
pub(crate) fn fixture(pairs: &[(&str, &str)]) -> Fixture {
    fixture_with_config(pairs, GraphConfig::default())
}

pub(crate) fn fixture_with_config(pairs: &[(&str, &str)], config: GraphConfig) -> Fixture {
    let edges = Arc::new(MemoryGraphStore::new());
    let users = Arc::new(MemoryUserStore::new());
    for (a, b) in pairs {
        for u in [a, b] {
            if users.get_user(&id(u)).is_none() {
                users.create_user(*u, u.to_uppercase()).unwrap();
            }
        }
        edges.insert_edge(&Edge::new(*a, *b).unwrap()).unwrap();
    }
    let service = GraphService::with_config(edges.clone(), users.clone(), config);
    Fixture {
        service,
        edges,
        users,
    }
}

/// Wraps a [`MemoryGraphStore`] and fails adjacency lookups after a budget.
pub(crate) struct FlakyGraphStore {
    inner: MemoryGraphStore,
    lookups_before_failure: usize,
    lookups: AtomicUsize,
}

impl FlakyGraphStore {
    pub(crate) fn new(inner: MemoryGraphStore, lookups_before_failure: usize) -> Self {
        Self {
            inner,
            lookups_before_failure,
            lookups: AtomicUsize::new(0),
        }
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl GraphStore for FlakyGraphStore {
    fn insert_edge(&self, edge: &Edge) -> StoreResult<InsertOutcome> {
        self.inner.insert_edge(edge)
    }

    fn delete_edge(&self, edge: &Edge) -> StoreResult<DeleteOutcome> {
        self.inner.delete_edge(edge)
    }

    fn contains_edge(&self, edge: &Edge) -> StoreResult<bool> {
        self.inner.contains_edge(edge)
    }

    fn find_edges_incident(&self, user: &UserId) -> StoreResult<Vec<Edge>> {
        let n = self.lookups.fetch_add(1, Ordering::SeqCst);
        if n >= self.lookups_before_failure {
            return Err(StoreError::unavailable("injected failure"));
        }
        self.inner.find_edges_incident(user)
    }
}

/// Graph store whose insert always loses a race: the contains check says
/// absent but the insert reports a duplicate.
#[derive(Default)]
pub(crate) struct RacingGraphStore;

impl GraphStore for RacingGraphStore {
    fn insert_edge(&self, _edge: &Edge) -> StoreResult<InsertOutcome> {
        Ok(InsertOutcome::AlreadyExists)
    }

    fn delete_edge(&self, _edge: &Edge) -> StoreResult<DeleteOutcome> {
        Ok(DeleteOutcome::NotFound)
    }

    fn contains_edge(&self, _edge: &Edge) -> StoreResult<bool> {
        Ok(false)
    }

    fn find_edges_incident(&self, _user: &UserId) -> StoreResult<Vec<Edge>> {
        Ok(Vec::new())
    }
}

/// Counts adjacency lookups, delegating to an inner store.
pub(crate) struct CountingGraphStore {
    pub inner: Arc<MemoryGraphStore>,
    pub lookups: AtomicUsize,
}

impl GraphStore for CountingGraphStore {
    fn insert_edge(&self, edge: &Edge) -> StoreResult<InsertOutcome> {
        self.inner.insert_edge(edge)
    }

    fn delete_edge(&self, edge: &Edge) -> StoreResult<DeleteOutcome> {
        self.inner.delete_edge(edge)
    }

    fn contains_edge(&self, edge: &Edge) -> StoreResult<bool> {
        self.inner.contains_edge(edge)
    }

    fn find_edges_incident(&self, user: &UserId) -> StoreResult<Vec<Edge>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_edges_incident(user)
    }
}

/// User store that is always unreachable.
pub(crate) struct DownUserStore;

impl UserStore for DownUserStore {
    fn exists(&self, _user: &UserId) -> StoreResult<bool> {
        Err(StoreError::unavailable("user store down"))
    }

    fn find_many(&self, _users: &BTreeSet<UserId>) -> StoreResult<HashMap<UserId, UserProfile>> {
        Err(StoreError::unavailable("user store down"))
    }
}
