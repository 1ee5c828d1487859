//! socialgraph: an undirected social graph engine.
//!
//! Users are opaque string identifiers owned by a user store. Connections
//! are stored once per unordered pair, in canonical order. On top of that
//! the engine answers:
//! - direct friends and friends of friends
//! - degree of separation (BFS over the implicit graph)
//! - one shortest connection path
//!
//! # Quick start
//!
//! ```
//! use socialgraph::{InMemory, Separation};
//!
//! let db = InMemory::new();
//! for (id, name) in [("A", "Ada"), ("B", "Bo"), ("C", "Cy"), ("D", "Di")] {
//!     db.users.create_user(id, name).unwrap();
//! }
//! db.graph.add_connection("A", "B").unwrap();
//! db.graph.add_connection("B", "C").unwrap();
//! db.graph.add_connection("C", "D").unwrap();
//!
//! assert_eq!(db.graph.degree_of_separation("A", "D").unwrap(), Separation::Degree(3));
//! ```
//!
//! # Crates
//!
//! - [`socialgraph_core`]: identifiers, edge codec, errors, store traits
//! - [`socialgraph_storage`]: in-memory stores
//! - [`socialgraph_engine`]: the graph service and its configuration
//! - [`socialgraph_executor`]: commands, outputs and the typed API

use std::sync::Arc;

pub use socialgraph_core::{
    codec, CancellationToken, Edge, Friend, GraphError, GraphResult, GraphStore, OpContext,
    Separation, StoreError, UserId, UserProfile, UserStore,
};
pub use socialgraph_engine::{GraphConfig, GraphService, NeighborhoodConfig, TraversalLimits};
pub use socialgraph_executor::{Command, Error, Executor, Output, Result, SocialGraph};
pub use socialgraph_storage::{MemoryGraphStore, MemoryUserStore};

/// A [`SocialGraph`] over in-memory stores, with the stores kept at hand.
#[derive(Debug, Clone)]
pub struct InMemory {
    /// The graph API.
    pub graph: SocialGraph,
    /// Connection storage.
    pub edges: Arc<MemoryGraphStore>,
    /// User registry.
    pub users: Arc<MemoryUserStore>,
}

impl InMemory {
    /// Empty stores, default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Empty stores, explicit configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        let edges = Arc::new(MemoryGraphStore::new());
        let users = Arc::new(MemoryUserStore::new());
        let graph = SocialGraph::with_config(edges.clone(), users.clone(), config);
        Self {
            graph,
            edges,
            users,
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}
