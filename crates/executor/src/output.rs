//! Command results.

use serde::{Deserialize, Serialize};
use socialgraph_core::{Edge, Friend, Separation, UserId};

/// Successful result of a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// The canonical edge that was added or removed.
    Connection(Edge),
    /// Friends sorted by user id.
    Friends(Vec<Friend>),
    /// Shortest-path outcome.
    Separation(Separation),
    /// A shortest path, or `None` if the users are not connected.
    Path(Option<Vec<UserId>>),
    /// Boolean answer.
    Bool(bool),
}
