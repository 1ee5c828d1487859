//! Neighborhood and path query handlers.

use socialgraph_core::{OpContext, UserId};
use socialgraph_engine::GraphService;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ListFriends command.
pub fn list_friends(g: &GraphService, ctx: &OpContext, user: UserId) -> Result<Output> {
    let friends = convert_result(g.first_degree(ctx, &user))?;
    Ok(Output::Friends(friends))
}

/// Handle ListFriendsOfFriends command.
pub fn list_friends_of_friends(
    g: &GraphService,
    ctx: &OpContext,
    user: UserId,
) -> Result<Output> {
    let friends = convert_result(g.second_degree(ctx, &user))?;
    Ok(Output::Friends(friends))
}

/// Handle DegreeOfSeparation command.
pub fn degree_of_separation(
    g: &GraphService,
    ctx: &OpContext,
    from: UserId,
    to: UserId,
) -> Result<Output> {
    let separation = convert_result(g.degree_of_separation(ctx, &from, &to))?;
    Ok(Output::Separation(separation))
}

/// Handle ConnectionPath command.
pub fn connection_path(
    g: &GraphService,
    ctx: &OpContext,
    from: UserId,
    to: UserId,
) -> Result<Output> {
    let path = convert_result(g.connection_path(ctx, &from, &to))?;
    Ok(Output::Path(path))
}
