//! In-memory user directory.
//!
//! Stands in for the external user-profile store. Registration assigns an
//! internal numeric id alongside the caller's `user_str_id`; the graph only
//! ever sees the string id.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use socialgraph_core::{StoreError, StoreResult, UserId, UserProfile, UserStore};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Store-assigned id, unique for the store's lifetime.
    pub internal_id: u64,
    /// The external identifier.
    pub user_id: UserId,
    /// Human-readable name.
    pub display_name: String,
}

/// DashMap-backed [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<UserId, UserRecord>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    ///
    /// Fails with [`StoreError::Duplicate`] if the id is taken and
    /// [`StoreError::Rejected`] if it is empty.
    pub fn create_user(
        &self,
        user_id: impl Into<UserId>,
        display_name: impl Into<String>,
    ) -> StoreResult<UserRecord> {
        let user_id = user_id.into();
        if user_id.is_empty() {
            return Err(StoreError::Rejected {
                reason: "user_str_id must not be empty".into(),
            });
        }
        match self.users.entry(user_id) {
            Entry::Occupied(slot) => Err(StoreError::Duplicate {
                key: slot.key().to_string(),
            }),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    internal_id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
                    user_id: slot.key().clone(),
                    display_name: display_name.into(),
                };
                slot.insert(record.clone());
                tracing::debug!(
                    target: "socialgraph::storage",
                    user = %record.user_id,
                    internal_id = record.internal_id,
                    "user created"
                );
                Ok(record)
            }
        }
    }

    /// Look up a registered user.
    pub fn get_user(&self, user_id: &UserId) -> Option<UserRecord> {
        self.users.get(user_id).map(|r| r.value().clone())
    }

    /// Remove a user. Returns whether it existed.
    ///
    /// Edges referencing the user are left alone; dangling references are
    /// the caller's consistency concern.
    pub fn remove_user(&self, user_id: &UserId) -> bool {
        self.users.remove(user_id).is_some()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for MemoryUserStore {
    fn exists(&self, user: &UserId) -> StoreResult<bool> {
        Ok(self.users.contains_key(user))
    }

    fn find_many(&self, users: &BTreeSet<UserId>) -> StoreResult<HashMap<UserId, UserProfile>> {
        Ok(users
            .iter()
            .filter_map(|id| {
                self.users.get(id).map(|r| {
                    (
                        id.clone(),
                        UserProfile {
                            display_name: r.display_name.clone(),
                        },
                    )
                })
            })
            .collect())
    }
}
