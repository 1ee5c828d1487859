//! Storage backends for socialgraph
//!
//! In-memory implementations of the storage contracts in `socialgraph-core`:
//! - [`MemoryGraphStore`]: sharded edge store with store-enforced uniqueness
//! - [`MemoryUserStore`]: user directory with registration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edges;
pub mod users;

pub use edges::{EdgeRecord, MemoryGraphStore};
pub use users::{MemoryUserStore, UserRecord};
