//! Typed API over the executor.
//!
//! [`SocialGraph`] turns each command/output pair into an ordinary method:
//!
//! ```ignore
//! use socialgraph_executor::SocialGraph;
//!
//! let graph = SocialGraph::new(edges, users);
//! graph.add_connection("alice", "bob")?;
//! let friends = graph.friends("alice")?;
//! ```

mod graph;

use std::sync::Arc;
use std::time::Duration;

use socialgraph_core::{GraphStore, OpContext, UserStore};
use socialgraph_engine::{GraphConfig, GraphService};

use crate::Executor;

/// Social graph handle.
///
/// Cheap to clone; clones share the same stores.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    executor: Executor,
    timeout: Option<Duration>,
}

impl SocialGraph {
    /// Open a graph over the given stores with default configuration.
    pub fn new(graph: Arc<dyn GraphStore>, users: Arc<dyn UserStore>) -> Self {
        Self::with_config(graph, users, GraphConfig::default())
    }

    /// Open a graph with explicit engine configuration.
    pub fn with_config(
        graph: Arc<dyn GraphStore>,
        users: Arc<dyn UserStore>,
        config: GraphConfig,
    ) -> Self {
        Self::from_executor(Executor::new(GraphService::with_config(graph, users, config)))
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor) -> Self {
        Self {
            executor,
            timeout: None,
        }
    }

    /// Apply a deadline of `timeout` to every subsequent call on this handle.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The underlying executor, for running [`Command`](crate::Command)s
    /// directly (for example ones decoded from JSON).
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The engine configuration this handle was opened with.
    pub fn config(&self) -> &GraphConfig {
        self.executor.service().config()
    }

    fn context(&self) -> OpContext {
        match self.timeout {
            Some(budget) => OpContext::background().with_timeout(budget),
            None => OpContext::background(),
        }
    }
}
