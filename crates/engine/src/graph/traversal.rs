//! Shortest-path traversal: degree of separation and connection paths.
//!
//! Breadth-first search over the implicit graph. Adjacency is fetched from
//! the store one user at a time as the frontier advances; nothing is
//! preloaded. A user is marked visited when enqueued, so each user is
//! expanded at most once and its first discovery is along a shortest path.

use std::collections::{HashMap, VecDeque};

use socialgraph_core::codec;
use socialgraph_core::{GraphError, GraphResult, OpContext, Separation, UserId};

use super::{GraphService, LOG_TARGET};

/// Outcome of a single BFS run.
enum Search {
    /// `to` was discovered while expanding `last`.
    Found {
        depth: usize,
        last: UserId,
        /// Discovered user -> the user it was discovered from (`None` for the origin).
        parents: HashMap<UserId, Option<UserId>>,
    },
    /// The frontier emptied without reaching `to`.
    Exhausted,
    /// Traversal limits stopped the search.
    Truncated { explored: usize },
}

impl GraphService {
    /// Length of the shortest path between two users.
    ///
    /// `from == to` answers `Degree(0)` without touching the store. Users in
    /// different components answer `Unreachable`. With traversal limits
    /// configured, a search they cut short answers `SearchLimitReached`.
    pub fn degree_of_separation(
        &self,
        ctx: &OpContext,
        from: &UserId,
        to: &UserId,
    ) -> GraphResult<Separation> {
        codec::validate_user_id(from.as_str())?;
        codec::validate_user_id(to.as_str())?;
        if from == to {
            return Ok(Separation::Degree(0));
        }

        let separation = match self.search(ctx, from, to)? {
            Search::Found { depth, .. } => Separation::Degree(depth),
            Search::Exhausted => Separation::Unreachable,
            Search::Truncated { explored } => Separation::SearchLimitReached { explored },
        };
        tracing::debug!(target: LOG_TARGET, %from, %to, ?separation, "degree of separation");
        Ok(separation)
    }

    /// One shortest path between two users, endpoints included.
    ///
    /// Returns `Some(vec![from])` when `from == to` and `None` when no path
    /// exists. Fails with `SearchLimitReached` if traversal limits cut the
    /// search short.
    pub fn connection_path(
        &self,
        ctx: &OpContext,
        from: &UserId,
        to: &UserId,
    ) -> GraphResult<Option<Vec<UserId>>> {
        codec::validate_user_id(from.as_str())?;
        codec::validate_user_id(to.as_str())?;
        if from == to {
            return Ok(Some(vec![from.clone()]));
        }

        match self.search(ctx, from, to)? {
            Search::Found { last, parents, .. } => {
                let mut path = vec![to.clone()];
                let mut cursor = Some(last);
                while let Some(user) = cursor {
                    cursor = parents.get(&user).cloned().flatten();
                    path.push(user);
                }
                path.reverse();
                Ok(Some(path))
            }
            Search::Exhausted => Ok(None),
            Search::Truncated { explored } => Err(GraphError::SearchLimitReached { explored }),
        }
    }

    fn search(&self, ctx: &OpContext, from: &UserId, to: &UserId) -> GraphResult<Search> {
        let limits = self.config.traversal;

        let mut parents: HashMap<UserId, Option<UserId>> = HashMap::new();
        let mut queue: VecDeque<(UserId, usize)> = VecDeque::new();
        let mut truncated = false;

        parents.insert(from.clone(), None);
        queue.push_back((from.clone(), 0));

        'search: while let Some((current, depth)) = queue.pop_front() {
            if limits.max_depth.map_or(false, |max| depth >= max) {
                truncated = true;
                continue;
            }

            let neighbors = match self.neighbor_ids(ctx, &current) {
                Ok(neighbors) => neighbors,
                Err(e) => {
                    if let GraphError::StoreUnavailable { .. } = e {
                        tracing::warn!(
                            target: LOG_TARGET,
                            %from,
                            %to,
                            %current,
                            depth,
                            error = %e,
                            "traversal interrupted by store failure"
                        );
                    }
                    return Err(e);
                }
            };

            // Once the cap is hit, the rest of this already-fetched set is
            // still checked for `to`, but nothing more is enqueued.
            let mut capped = false;
            for neighbor in neighbors {
                if parents.contains_key(&neighbor) {
                    continue;
                }
                if neighbor == *to {
                    return Ok(Search::Found {
                        depth: depth + 1,
                        last: current,
                        parents,
                    });
                }
                if capped {
                    continue;
                }
                if limits.max_visited.map_or(false, |max| parents.len() >= max) {
                    capped = true;
                    continue;
                }
                parents.insert(neighbor.clone(), Some(current.clone()));
                queue.push_back((neighbor, depth + 1));
            }
            if capped {
                truncated = true;
                break 'search;
            }
        }

        let explored = parents.len();
        if truncated {
            tracing::debug!(target: LOG_TARGET, %from, %to, explored, "search limit reached");
            Ok(Search::Truncated { explored })
        } else {
            Ok(Search::Exhausted)
        }
    }
}
