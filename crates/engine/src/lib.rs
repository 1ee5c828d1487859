//! Social graph engine.
//!
//! [`GraphService`] implements connection mutation, neighborhood queries and
//! shortest-path search over injected [`GraphStore`] and [`UserStore`]
//! implementations. Configuration lives in [`config`].
//!
//! [`GraphStore`]: socialgraph_core::GraphStore
//! [`UserStore`]: socialgraph_core::UserStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

pub use config::{GraphConfig, NeighborhoodConfig, TraversalLimits};
pub use graph::GraphService;
