//! Command execution layer for socialgraph.
//!
//! Every operation is expressed as a serializable [`Command`] and produces
//! an [`Output`] or an [`Error`]. [`Executor`] dispatches commands to the
//! engine; [`SocialGraph`] wraps it in a typed method-per-operation API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;

pub use api::SocialGraph;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
