//! Error types.
//!
//! Two layers:
//! - [`StoreError`]: what a storage backend reports
//! - [`GraphError`]: what engine operations return to callers
//!
//! A `StoreError` always surfaces as [`GraphError::StoreUnavailable`]; the
//! engine never retries it.

use thiserror::Error;

use crate::types::{Edge, UserId};

/// Result type for engine operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Result type for storage backend calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached or failed mid-operation.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Backend-specific description.
        reason: String,
    },

    /// A record with the same unique key already exists.
    #[error("duplicate record: {key}")]
    Duplicate {
        /// The conflicting key.
        key: String,
    },

    /// The backend refused a record as malformed.
    #[error("record rejected: {reason}")]
    Rejected {
        /// Why the record was refused.
        reason: String,
    },

    /// A stored record could not be decoded.
    #[error("corrupt record '{key}': {reason}")]
    Corrupt {
        /// Key of the unreadable record.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl StoreError {
    /// Create an `Unavailable` error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Failure of an engine operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A connection from a user to itself was requested.
    #[error("invalid edge: user '{user}' cannot be connected to itself")]
    InvalidEdge {
        /// The user on both sides of the pair.
        user: UserId,
    },

    /// One or both endpoints are unknown to the user store.
    #[error("user not found: {}", join_ids(.missing))]
    VertexNotFound {
        /// The endpoints that do not exist.
        missing: Vec<UserId>,
    },

    /// The connection is already present.
    #[error("connection already exists: {edge}")]
    EdgeAlreadyExists {
        /// The canonical edge.
        edge: Edge,
    },

    /// The connection to remove is not present.
    #[error("connection not found: {edge}")]
    EdgeNotFound {
        /// The canonical edge.
        edge: Edge,
    },

    /// A storage call failed.
    #[error("store unavailable: {reason}")]
    StoreUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Malformed input, such as an empty identifier or bad configuration.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong.
        message: String,
    },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// The operation ran past its deadline.
    #[error("operation exceeded its {budget_ms}ms deadline")]
    DeadlineExceeded {
        /// The budget the caller allowed.
        budget_ms: u64,
    },

    /// Traversal limits stopped a path search before it could decide.
    #[error("search limit reached after exploring {explored} users")]
    SearchLimitReached {
        /// Users discovered before stopping.
        explored: usize,
    },
}

impl GraphError {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a `StoreUnavailable` error.
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        GraphError::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// True for failures a caller-supplied retry policy might resolve.
    ///
    /// Logical outcomes (existence, duplication) never change on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GraphError::StoreUnavailable { .. } | GraphError::DeadlineExceeded { .. }
        )
    }
}

impl From<StoreError> for GraphError {
    fn from(err: StoreError) -> Self {
        GraphError::StoreUnavailable {
            reason: err.to_string(),
        }
    }
}

fn join_ids(ids: &[UserId]) -> String {
    ids.iter()
        .map(UserId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
