//! Identifier, edge, and query result types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::GraphError;

/// Opaque, externally assigned user identifier (`user_str_id`).
///
/// The graph never generates or rewrites identifiers. Ordering is byte-wise
/// lexicographic on the underlying string, which is the total order the
/// edge codec canonicalizes with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the raw string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An undirected connection between two distinct users, in canonical form.
///
/// `low < high` always holds. The only ways to build an `Edge` are
/// [`codec::canonicalize`] (and [`Edge::new`], which calls it) or
/// deserialization, which canonicalizes as well, so two edges over the same
/// unordered pair always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(UserId, UserId)", into = "(UserId, UserId)")]
pub struct Edge {
    low: UserId,
    high: UserId,
}

impl Edge {
    /// Canonicalize an unordered pair into an edge.
    ///
    /// Fails with `InvalidEdge` for a self-pair and `InvalidInput` for an
    /// empty identifier.
    pub fn new(u1: impl Into<UserId>, u2: impl Into<UserId>) -> Result<Self, GraphError> {
        codec::canonicalize(&u1.into(), &u2.into())
    }

    /// Build from endpoints already known to be ordered and distinct.
    pub(crate) fn from_ordered(low: UserId, high: UserId) -> Self {
        debug_assert!(low < high);
        Self { low, high }
    }

    /// The lesser endpoint.
    pub fn low(&self) -> &UserId {
        &self.low
    }

    /// The greater endpoint.
    pub fn high(&self) -> &UserId {
        &self.high
    }

    /// The endpoint opposite `user`, or `None` if `user` is not an endpoint.
    pub fn other(&self, user: &UserId) -> Option<&UserId> {
        if self.low == *user {
            Some(&self.high)
        } else if self.high == *user {
            Some(&self.low)
        } else {
            None
        }
    }

    /// Split into `(low, high)`.
    pub fn into_pair(self) -> (UserId, UserId) {
        (self.low, self.high)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl TryFrom<(UserId, UserId)> for Edge {
    type Error = GraphError;

    fn try_from((a, b): (UserId, UserId)) -> Result<Self, Self::Error> {
        codec::canonicalize(&a, &b)
    }
}

impl From<Edge> for (UserId, UserId) {
    fn from(edge: Edge) -> Self {
        edge.into_pair()
    }
}

/// Display metadata the user store returns for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Human-readable name.
    pub display_name: String,
}

/// An entry in a friend or friend-of-friend listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Friend {
    /// The friend's identifier.
    pub user_id: UserId,
    /// The friend's display name, as resolved from the user store.
    pub display_name: String,
}

/// Outcome of a degree-of-separation query.
///
/// `Unreachable` is a successful answer: the two users sit in different
/// connected components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separation {
    /// Length of the shortest path, in edges.
    Degree(usize),
    /// No path exists.
    Unreachable,
    /// Configured traversal limits stopped the search before it could decide.
    SearchLimitReached {
        /// Number of users discovered before the search stopped.
        explored: usize,
    },
}

impl Separation {
    /// The degree, if a path was found.
    pub fn degree(&self) -> Option<usize> {
        match self {
            Separation::Degree(d) => Some(*d),
            _ => None,
        }
    }

    /// True if a path was found.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Separation::Degree(_))
    }
}
