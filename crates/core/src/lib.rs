//! Core types for socialgraph
//!
//! This crate defines the vocabulary shared by every other crate:
//! - [`UserId`] and the canonical [`Edge`] pair
//! - The edge codec ([`codec`]): canonical ordering and storage keys
//! - The error taxonomy ([`GraphError`], [`StoreError`])
//! - The storage contracts the engine consumes ([`GraphStore`], [`UserStore`])
//! - Cooperative cancellation ([`OpContext`], [`CancellationToken`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod context;
pub mod error;
pub mod traits;
pub mod types;

pub use context::{CancellationToken, OpContext};
pub use error::{GraphError, GraphResult, StoreError, StoreResult};
pub use traits::{DeleteOutcome, GraphStore, InsertOutcome, UserStore};
pub use types::{Edge, Friend, Separation, UserId, UserProfile};
