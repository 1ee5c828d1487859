//! Commands accepted by the executor.
//!
//! A [`Command`] is a self-contained, serializable request. JSON form uses
//! an internal `command` tag:
//!
//! ```json
//! {"command": "create_connection", "user1": "alice", "user2": "bob"}
//! ```

use serde::{Deserialize, Serialize};
use socialgraph_core::UserId;

/// A single graph operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // =========================================================================
    // Mutations
    // =========================================================================
    /// Connect two users. Returns `Output::Connection`.
    CreateConnection {
        /// One endpoint.
        user1: UserId,
        /// The other endpoint.
        user2: UserId,
    },

    /// Disconnect two users. Returns `Output::Connection`.
    RemoveConnection {
        /// One endpoint.
        user1: UserId,
        /// The other endpoint.
        user2: UserId,
    },

    // =========================================================================
    // Queries
    // =========================================================================
    /// Check for a direct connection. Returns `Output::Bool`.
    AreConnected {
        /// One endpoint.
        user1: UserId,
        /// The other endpoint.
        user2: UserId,
    },

    /// Direct friends. Returns `Output::Friends`.
    ListFriends {
        /// Whose friends.
        user: UserId,
    },

    /// Friends of friends. Returns `Output::Friends`.
    ListFriendsOfFriends {
        /// Whose friends of friends.
        user: UserId,
    },

    /// Shortest-path length. Returns `Output::Separation`.
    DegreeOfSeparation {
        /// Search origin.
        from: UserId,
        /// Search target.
        to: UserId,
    },

    /// One shortest path. Returns `Output::Path`.
    ConnectionPath {
        /// Search origin.
        from: UserId,
        /// Search target.
        to: UserId,
    },
}

impl Command {
    /// Command name, as used in logs and the JSON tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateConnection { .. } => "create_connection",
            Command::RemoveConnection { .. } => "remove_connection",
            Command::AreConnected { .. } => "are_connected",
            Command::ListFriends { .. } => "list_friends",
            Command::ListFriendsOfFriends { .. } => "list_friends_of_friends",
            Command::DegreeOfSeparation { .. } => "degree_of_separation",
            Command::ConnectionPath { .. } => "connection_path",
        }
    }

    /// True for commands that change the graph.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::CreateConnection { .. } | Command::RemoveConnection { .. }
        )
    }
}
