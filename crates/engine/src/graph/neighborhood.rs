//! Neighborhood queries: direct friends and friends-of-friends.

use std::collections::BTreeSet;

use rayon::prelude::*;
use socialgraph_core::codec;
use socialgraph_core::{Friend, GraphResult, OpContext, UserId};

use super::{GraphService, LOG_TARGET};

impl GraphService {
    /// Identifiers of `user`'s direct friends. Empty when there are none.
    pub fn first_degree_ids(
        &self,
        ctx: &OpContext,
        user: &UserId,
    ) -> GraphResult<BTreeSet<UserId>> {
        codec::validate_user_id(user.as_str())?;
        self.neighbor_ids(ctx, user)
    }

    /// `user`'s direct friends with display names, sorted by id.
    pub fn first_degree(&self, ctx: &OpContext, user: &UserId) -> GraphResult<Vec<Friend>> {
        let ids = self.first_degree_ids(ctx, user)?;
        let friends = self.resolve_friends(ctx, ids)?;
        tracing::debug!(target: LOG_TARGET, %user, count = friends.len(), "listed friends");
        Ok(friends)
    }

    /// Identifiers reachable in exactly two hops and no fewer.
    ///
    /// Neither `user` nor any direct friend appears in the result, however
    /// many two-hop paths lead to them.
    pub fn second_degree_ids(
        &self,
        ctx: &OpContext,
        user: &UserId,
    ) -> GraphResult<BTreeSet<UserId>> {
        codec::validate_user_id(user.as_str())?;
        let direct = self.neighbor_ids(ctx, user)?;

        let fanout = &self.config.neighborhood;
        let reached: Vec<BTreeSet<UserId>> =
            if fanout.parallel_fanout && direct.len() >= fanout.parallel_threshold {
                direct
                    .par_iter()
                    .map(|friend| self.neighbor_ids(ctx, friend))
                    .collect::<GraphResult<_>>()?
            } else {
                direct
                    .iter()
                    .map(|friend| self.neighbor_ids(ctx, friend))
                    .collect::<GraphResult<_>>()?
            };

        Ok(reached
            .into_iter()
            .flatten()
            .filter(|candidate| candidate != user && !direct.contains(candidate))
            .collect())
    }

    /// Friends-of-friends with display names, sorted by id.
    pub fn second_degree(&self, ctx: &OpContext, user: &UserId) -> GraphResult<Vec<Friend>> {
        let ids = self.second_degree_ids(ctx, user)?;
        let friends = self.resolve_friends(ctx, ids)?;
        tracing::debug!(
            target: LOG_TARGET,
            %user,
            count = friends.len(),
            "listed friends of friends"
        );
        Ok(friends)
    }
}
