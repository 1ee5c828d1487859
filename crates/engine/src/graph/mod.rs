//! Graph module for socialgraph.
//!
//! [`GraphService`] is a stateless facade over two injected stores. It
//! keeps no adjacency of its own: every query re-derives what it needs
//! from the [`GraphStore`], so independent services (or tests) over
//! isolated stores never interfere.
//!
//! Operations are split by concern:
//! - `connections`: add/remove a connection
//! - `neighborhood`: first- and second-degree friend sets
//! - `traversal`: degree of separation and shortest connection path

pub mod connections;
pub mod neighborhood;
pub mod traversal;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeSet;
use std::sync::Arc;

use socialgraph_core::{Friend, GraphResult, GraphStore, OpContext, UserId, UserStore};

use crate::config::GraphConfig;

pub(crate) const LOG_TARGET: &str = "socialgraph::graph";

/// Graph engine providing connection mutation and relationship queries.
#[derive(Clone)]
pub struct GraphService {
    graph: Arc<dyn GraphStore>,
    users: Arc<dyn UserStore>,
    config: GraphConfig,
}

impl GraphService {
    /// Create a service over the given stores with default configuration.
    pub fn new(graph: Arc<dyn GraphStore>, users: Arc<dyn UserStore>) -> Self {
        Self::with_config(graph, users, GraphConfig::default())
    }

    /// Create a service with explicit configuration.
    pub fn with_config(
        graph: Arc<dyn GraphStore>,
        users: Arc<dyn UserStore>,
        config: GraphConfig,
    ) -> Self {
        Self {
            graph,
            users,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // =========================================================================
    // Helpers shared by the query modules
    // =========================================================================

    /// Direct neighbors of `user`, straight from the store.
    pub(crate) fn neighbor_ids(
        &self,
        ctx: &OpContext,
        user: &UserId,
    ) -> GraphResult<BTreeSet<UserId>> {
        ctx.check()?;
        let edges = self.graph.find_edges_incident(user)?;
        Ok(edges
            .iter()
            .filter_map(|edge| edge.other(user))
            .cloned()
            .collect())
    }

    /// Resolve identifiers to display names with one batched lookup.
    ///
    /// Identifiers without a profile are dropped. Output is sorted by id.
    pub(crate) fn resolve_friends(
        &self,
        ctx: &OpContext,
        ids: BTreeSet<UserId>,
    ) -> GraphResult<Vec<Friend>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        ctx.check()?;
        let mut profiles = self.users.find_many(&ids)?;

        let requested = ids.len();
        let friends: Vec<Friend> = ids
            .into_iter()
            .filter_map(|user_id| {
                profiles.remove(&user_id).map(|p| Friend {
                    user_id,
                    display_name: p.display_name,
                })
            })
            .collect();

        if friends.len() < requested {
            tracing::debug!(
                target: LOG_TARGET,
                requested,
                resolved = friends.len(),
                "dropping users with no profile"
            );
        }
        Ok(friends)
    }
}

impl std::fmt::Debug for GraphService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
