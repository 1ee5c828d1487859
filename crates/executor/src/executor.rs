//! Command dispatch.

use std::time::Instant;

use socialgraph_core::OpContext;
use socialgraph_engine::GraphService;

use crate::handlers::{connections, queries};
use crate::{Command, Output, Result};

const LOG_TARGET: &str = "socialgraph::executor";

/// Runs [`Command`]s against a [`GraphService`].
#[derive(Debug, Clone)]
pub struct Executor {
    service: GraphService,
}

impl Executor {
    /// Create an executor over an engine service.
    pub fn new(service: GraphService) -> Self {
        Self { service }
    }

    /// The underlying engine service.
    pub fn service(&self) -> &GraphService {
        &self.service
    }

    /// Execute a command with no deadline and no cancellation.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.execute_with(&OpContext::background(), cmd)
    }

    /// Execute a command under a caller-supplied context.
    pub fn execute_with(&self, ctx: &OpContext, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let write = cmd.is_write();
        let started = Instant::now();
        let g = &self.service;

        let result = match cmd {
            Command::CreateConnection { user1, user2 } => {
                connections::create_connection(g, ctx, user1, user2)
            }
            Command::RemoveConnection { user1, user2 } => {
                connections::remove_connection(g, ctx, user1, user2)
            }
            Command::AreConnected { user1, user2 } => {
                connections::are_connected(g, ctx, user1, user2)
            }
            Command::ListFriends { user } => queries::list_friends(g, ctx, user),
            Command::ListFriendsOfFriends { user } => {
                queries::list_friends_of_friends(g, ctx, user)
            }
            Command::DegreeOfSeparation { from, to } => {
                queries::degree_of_separation(g, ctx, from, to)
            }
            Command::ConnectionPath { from, to } => queries::connection_path(g, ctx, from, to),
        };

        let elapsed_us = started.elapsed().as_micros() as u64;
        match &result {
            Ok(_) => {
                tracing::trace!(target: LOG_TARGET, command = name, write, elapsed_us, "ok");
            }
            Err(e) if e.is_retryable() => {
                tracing::warn!(
                    target: LOG_TARGET,
                    command = name,
                    elapsed_us,
                    error = %e,
                    "command failed"
                );
            }
            Err(e) => {
                tracing::debug!(
                    target: LOG_TARGET,
                    command = name,
                    kind = e.kind(),
                    error = %e,
                    "command rejected"
                );
            }
        }
        result
    }
}
