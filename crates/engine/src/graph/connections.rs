//! Connection mutation: add and remove an edge.
//!
//! Both operations canonicalize first, so a self-pair is rejected before any
//! store access. Uniqueness rests on the store: even after the explicit
//! existence check, a racing insert is caught by the store's unique
//! constraint and reported as `EdgeAlreadyExists`.

use socialgraph_core::codec;
use socialgraph_core::{
    DeleteOutcome, Edge, GraphError, GraphResult, InsertOutcome, OpContext, UserId,
};

use super::{GraphService, LOG_TARGET};

impl GraphService {
    /// Connect two users.
    ///
    /// Fails with `InvalidEdge` for a self-pair, `VertexNotFound` if either
    /// user is unknown to the user store, and `EdgeAlreadyExists` if the pair
    /// is already connected. Returns the stored canonical edge.
    pub fn add_connection(
        &self,
        ctx: &OpContext,
        u1: &UserId,
        u2: &UserId,
    ) -> GraphResult<Edge> {
        let edge = codec::canonicalize(u1, u2)?;

        let mut missing = Vec::new();
        for user in [edge.low(), edge.high()] {
            ctx.check()?;
            if !self.users.exists(user)? {
                missing.push(user.clone());
            }
        }
        if !missing.is_empty() {
            return Err(GraphError::VertexNotFound { missing });
        }

        ctx.check()?;
        if self.graph.contains_edge(&edge)? {
            return Err(GraphError::EdgeAlreadyExists { edge });
        }

        ctx.check()?;
        match self.graph.insert_edge(&edge)? {
            InsertOutcome::Inserted => {
                tracing::debug!(target: LOG_TARGET, %edge, "connection added");
                Ok(edge)
            }
            InsertOutcome::AlreadyExists => {
                tracing::warn!(
                    target: LOG_TARGET,
                    %edge,
                    "concurrent insert caught by unique constraint"
                );
                Err(GraphError::EdgeAlreadyExists { edge })
            }
        }
    }

    /// Disconnect two users.
    ///
    /// Fails with `InvalidEdge` for a self-pair and `EdgeNotFound` if the pair
    /// was not connected. Returns the removed canonical edge.
    pub fn remove_connection(
        &self,
        ctx: &OpContext,
        u1: &UserId,
        u2: &UserId,
    ) -> GraphResult<Edge> {
        let edge = codec::canonicalize(u1, u2)?;

        ctx.check()?;
        match self.graph.delete_edge(&edge)? {
            DeleteOutcome::Deleted => {
                tracing::debug!(target: LOG_TARGET, %edge, "connection removed");
                Ok(edge)
            }
            DeleteOutcome::NotFound => Err(GraphError::EdgeNotFound { edge }),
        }
    }

    /// Check whether two users are directly connected.
    ///
    /// A user is never connected to itself.
    pub fn are_connected(
        &self,
        ctx: &OpContext,
        u1: &UserId,
        u2: &UserId,
    ) -> GraphResult<bool> {
        let edge = match codec::canonicalize(u1, u2) {
            Ok(edge) => edge,
            Err(GraphError::InvalidEdge { .. }) => return Ok(false),
            Err(e) => return Err(e),
        };
        ctx.check()?;
        Ok(self.graph.contains_edge(&edge)?)
    }
}
