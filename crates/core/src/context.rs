//! Cooperative cancellation and deadlines.
//!
//! Every engine operation takes an [`OpContext`] and checks it before each
//! storage call, so a long traversal stops promptly once the caller gives up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{GraphError, GraphResult};

/// Cancellation flag shared between a caller and running operations.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Per-call execution context: a cancellation token and an optional deadline.
#[derive(Debug, Clone, Default)]
pub struct OpContext {
    token: CancellationToken,
    deadline: Option<(Instant, Duration)>,
}

impl OpContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context observing the given token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set a deadline `budget` from now.
    ///
    /// A budget too large to represent as an instant sets no deadline.
    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.deadline = Instant::now()
            .checked_add(budget)
            .map(|at| (at, budget));
        self
    }

    /// The token this context observes.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Time left before the deadline, if one is set.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|(at, _)| at.saturating_duration_since(Instant::now()))
    }

    /// Fail if the operation was cancelled or ran out of time.
    #[inline]
    pub fn check(&self) -> GraphResult<()> {
        if self.token.is_cancelled() {
            return Err(GraphError::Cancelled);
        }
        if let Some((at, budget)) = self.deadline {
            if Instant::now() >= at {
                return Err(GraphError::DeadlineExceeded {
                    budget_ms: budget.as_millis() as u64,
                });
            }
        }
        Ok(())
    }
}
