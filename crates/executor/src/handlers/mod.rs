//! Command handlers.
//!
//! One function per [`Command`](crate::Command) variant. Each calls the
//! engine, converts the error, and wraps the value in an [`Output`](crate::Output).

pub mod connections;
pub mod queries;
