//! Error conversion from engine error types.
//!
//! Maps [`GraphError`] onto the executor's [`Error`], flattening typed
//! identifiers and edges into strings.

use socialgraph_core::{GraphError, GraphResult};

use crate::Error;

/// Convert a GraphError to an executor Error.
impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidEdge { user } => Error::InvalidConnection {
                user: user.into_string(),
            },

            GraphError::VertexNotFound { missing } => Error::UserNotFound {
                users: missing.into_iter().map(|u| u.into_string()).collect(),
            },

            GraphError::EdgeAlreadyExists { edge } => {
                let (low, high) = edge.into_pair();
                Error::AlreadyConnected {
                    user1: low.into_string(),
                    user2: high.into_string(),
                }
            }

            GraphError::EdgeNotFound { edge } => {
                let (low, high) = edge.into_pair();
                Error::NotConnected {
                    user1: low.into_string(),
                    user2: high.into_string(),
                }
            }

            GraphError::StoreUnavailable { reason } => Error::StoreUnavailable { reason },

            GraphError::InvalidInput { message } => Error::InvalidInput { reason: message },

            GraphError::Cancelled => Error::Cancelled,

            GraphError::DeadlineExceeded { budget_ms } => Error::Timeout { budget_ms },

            GraphError::SearchLimitReached { explored } => Error::SearchLimitReached { explored },
        }
    }
}

/// Convert a GraphResult to an executor Result.
pub fn convert_result<T>(result: GraphResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
