//! Engine configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! [traversal]
//! max_depth = 6
//! max_visited = 100000
//!
//! [neighborhood]
//! parallel_fanout = true
//! parallel_threshold = 32
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use socialgraph_core::{GraphError, GraphResult};

/// Bounds on a shortest-path search. Both default to unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalLimits {
    /// Users at this distance from the origin are not expanded.
    ///
    /// Must be at least 1 when loaded from TOML. Set directly to `Some(0)`,
    /// every query between distinct users reports `SearchLimitReached`.
    pub max_depth: Option<usize>,
    /// Stop once this many users have been discovered.
    pub max_visited: Option<usize>,
}

impl TraversalLimits {
    /// True if neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && self.max_visited.is_none()
    }
}

/// Second-degree fan-out settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeighborhoodConfig {
    /// Fetch friends' adjacency on the rayon pool.
    pub parallel_fanout: bool,
    /// Minimum number of direct friends before fanning out in parallel.
    pub parallel_threshold: usize,
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self {
            parallel_fanout: true,
            parallel_threshold: 32,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Shortest-path search bounds.
    pub traversal: TraversalLimits,
    /// Friend-of-friend fan-out.
    pub neighborhood: NeighborhoodConfig,
}

impl GraphConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> GraphResult<Self> {
        let config: GraphConfig = toml::from_str(s)
            .map_err(|e| GraphError::invalid_input(format!("invalid graph config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GraphError::invalid_input(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Replace the traversal limits.
    pub fn with_traversal(mut self, limits: TraversalLimits) -> Self {
        self.traversal = limits;
        self
    }

    fn validate(&self) -> GraphResult<()> {
        if self.traversal.max_depth == Some(0) {
            return Err(GraphError::invalid_input(
                "traversal.max_depth must be at least 1",
            ));
        }
        if self.traversal.max_visited == Some(0) {
            return Err(GraphError::invalid_input(
                "traversal.max_visited must be at least 1",
            ));
        }
        Ok(())
    }
}
