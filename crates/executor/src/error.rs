//! Executor error type.
//!
//! Every variant carries plain strings and numbers so an error can cross a
//! process or language boundary unchanged. [`Error::kind`] gives the stable
//! machine-readable code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure returned by [`Executor`](crate::Executor) and [`SocialGraph`](crate::SocialGraph).
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Error {
    /// Malformed input, such as an empty user id.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// A user was paired with itself.
    #[error("invalid connection: '{user}' cannot be connected to itself")]
    InvalidConnection {
        /// The user on both sides.
        user: String,
    },

    /// One or both users do not exist.
    #[error("user not found: {}", .users.join(", "))]
    UserNotFound {
        /// The missing users.
        users: Vec<String>,
    },

    /// The users are already connected.
    #[error("already connected: {user1} and {user2}")]
    AlreadyConnected {
        /// Lower endpoint of the canonical pair.
        user1: String,
        /// Higher endpoint of the canonical pair.
        user2: String,
    },

    /// The users are not connected.
    #[error("not connected: {user1} and {user2}")]
    NotConnected {
        /// Lower endpoint of the canonical pair.
        user1: String,
        /// Higher endpoint of the canonical pair.
        user2: String,
    },

    /// A backing store failed.
    #[error("store unavailable: {reason}")]
    StoreUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// The caller cancelled the command.
    #[error("cancelled")]
    Cancelled,

    /// The command ran past its deadline.
    #[error("timed out after {budget_ms}ms")]
    Timeout {
        /// The budget the caller allowed.
        budget_ms: u64,
    },

    /// Traversal limits stopped a path search.
    #[error("search limit reached after exploring {explored} users")]
    SearchLimitReached {
        /// Users discovered before stopping.
        explored: usize,
    },

    /// The executor produced something it should not have.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the inconsistency.
        reason: String,
    },
}

impl Error {
    /// Stable machine-readable error code.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "invalid_input",
            Error::InvalidConnection { .. } => "invalid_connection",
            Error::UserNotFound { .. } => "user_not_found",
            Error::AlreadyConnected { .. } => "already_connected",
            Error::NotConnected { .. } => "not_connected",
            Error::StoreUnavailable { .. } => "store_unavailable",
            Error::Cancelled => "cancelled",
            Error::Timeout { .. } => "timeout",
            Error::SearchLimitReached { .. } => "search_limit_reached",
            Error::Internal { .. } => "internal",
        }
    }

    /// True if repeating the command unchanged might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. } | Error::Timeout { .. })
    }
}
