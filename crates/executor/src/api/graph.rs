//! Graph operations on the SocialGraph API surface.

use socialgraph_core::{Edge, Friend, Separation, UserId};

use super::SocialGraph;
use crate::{Command, Error, Output, Result};

impl SocialGraph {
    // =========================================================================
    // Connections
    // =========================================================================

    /// Connect two users. Returns the stored canonical edge.
    pub fn add_connection(&self, user1: &str, user2: &str) -> Result<Edge> {
        match self.run(Command::CreateConnection {
            user1: user1.into(),
            user2: user2.into(),
        })? {
            Output::Connection(edge) => Ok(edge),
            _ => Err(Error::Internal {
                reason: "Unexpected output for CreateConnection".into(),
            }),
        }
    }

    /// Disconnect two users. Returns the removed canonical edge.
    pub fn remove_connection(&self, user1: &str, user2: &str) -> Result<Edge> {
        match self.run(Command::RemoveConnection {
            user1: user1.into(),
            user2: user2.into(),
        })? {
            Output::Connection(edge) => Ok(edge),
            _ => Err(Error::Internal {
                reason: "Unexpected output for RemoveConnection".into(),
            }),
        }
    }

    /// Check whether two users are directly connected.
    pub fn are_connected(&self, user1: &str, user2: &str) -> Result<bool> {
        match self.run(Command::AreConnected {
            user1: user1.into(),
            user2: user2.into(),
        })? {
            Output::Bool(b) => Ok(b),
            _ => Err(Error::Internal {
                reason: "Unexpected output for AreConnected".into(),
            }),
        }
    }

    // =========================================================================
    // Neighborhood
    // =========================================================================

    /// Direct friends of `user`, sorted by id.
    pub fn friends(&self, user: &str) -> Result<Vec<Friend>> {
        match self.run(Command::ListFriends { user: user.into() })? {
            Output::Friends(friends) => Ok(friends),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListFriends".into(),
            }),
        }
    }

    /// Friends of friends of `user`, sorted by id.
    pub fn friends_of_friends(&self, user: &str) -> Result<Vec<Friend>> {
        match self.run(Command::ListFriendsOfFriends { user: user.into() })? {
            Output::Friends(friends) => Ok(friends),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListFriendsOfFriends".into(),
            }),
        }
    }

    // =========================================================================
    // Paths
    // =========================================================================

    /// Degree of separation between two users.
    pub fn degree_of_separation(&self, from: &str, to: &str) -> Result<Separation> {
        match self.run(Command::DegreeOfSeparation {
            from: from.into(),
            to: to.into(),
        })? {
            Output::Separation(s) => Ok(s),
            _ => Err(Error::Internal {
                reason: "Unexpected output for DegreeOfSeparation".into(),
            }),
        }
    }

    /// One shortest path from `from` to `to`, or `None` if not connected.
    pub fn connection_path(&self, from: &str, to: &str) -> Result<Option<Vec<UserId>>> {
        match self.run(Command::ConnectionPath {
            from: from.into(),
            to: to.into(),
        })? {
            Output::Path(path) => Ok(path),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ConnectionPath".into(),
            }),
        }
    }

    fn run(&self, cmd: Command) -> Result<Output> {
        self.executor.execute_with(&self.context(), cmd)
    }
}
