//! Connection command handlers.

use socialgraph_core::{OpContext, UserId};
use socialgraph_engine::GraphService;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle CreateConnection command.
pub fn create_connection(
    g: &GraphService,
    ctx: &OpContext,
    user1: UserId,
    user2: UserId,
) -> Result<Output> {
    let edge = convert_result(g.add_connection(ctx, &user1, &user2))?;
    Ok(Output::Connection(edge))
}

/// Handle RemoveConnection command.
pub fn remove_connection(
    g: &GraphService,
    ctx: &OpContext,
    user1: UserId,
    user2: UserId,
) -> Result<Output> {
    let edge = convert_result(g.remove_connection(ctx, &user1, &user2))?;
    Ok(Output::Connection(edge))
}

/// Handle AreConnected command.
pub fn are_connected(
    g: &GraphService,
    ctx: &OpContext,
    user1: UserId,
    user2: UserId,
) -> Result<Output> {
    let connected = convert_result(g.are_connected(ctx, &user1, &user2))?;
    Ok(Output::Bool(connected))
}
