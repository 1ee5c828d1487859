//! Edge codec: canonical ordering and storage key layout.
//!
//! Every component builds edges through [`canonicalize`], so an unordered
//! pair has exactly one representation. Backends key their uniqueness
//! constraint on [`edge_key`].
//!
//! Key layout: `{len(low)}:{low}{high}`. The decimal length prefix makes
//! the split point unambiguous without reserving any separator character in
//! identifiers.

use crate::error::{GraphError, GraphResult};
use crate::types::{Edge, UserId};

/// Separator between the length prefix and the identifiers.
const LEN_SEP: char = ':';

// =============================================================================
// Validation
// =============================================================================

/// Validate a user identifier.
pub fn validate_user_id(id: &str) -> GraphResult<()> {
    if id.is_empty() {
        return Err(GraphError::invalid_input("User ID must not be empty"));
    }
    Ok(())
}

// =============================================================================
// Canonicalization
// =============================================================================

/// Reorder an unordered pair into its canonical `(low, high)` edge.
///
/// `canonicalize(a, b) == canonicalize(b, a)` for all distinct `a`, `b`.
/// A self-pair fails with [`GraphError::InvalidEdge`].
pub fn canonicalize(u1: &UserId, u2: &UserId) -> GraphResult<Edge> {
    validate_user_id(u1.as_str())?;
    validate_user_id(u2.as_str())?;
    if u1 == u2 {
        return Err(GraphError::InvalidEdge { user: u1.clone() });
    }
    let (low, high) = if u1 < u2 { (u1, u2) } else { (u2, u1) };
    Ok(Edge::from_ordered(low.clone(), high.clone()))
}

// =============================================================================
// Key Construction
// =============================================================================

/// Storage key for a canonical edge.
pub fn edge_key(edge: &Edge) -> String {
    let low = edge.low().as_str();
    let high = edge.high().as_str();
    format!("{}{LEN_SEP}{}{}", low.len(), low, high)
}

/// Parse a storage key back into its edge.
///
/// Returns `None` for malformed keys and for keys whose endpoints are not
/// in canonical order.
pub fn parse_edge_key(key: &str) -> Option<Edge> {
    let (len, rest) = key.split_once(LEN_SEP)?;
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len: usize = len.parse().ok()?;
    if len == 0 || !rest.is_char_boundary(len) || len >= rest.len() {
        return None;
    }
    let (low, high) = rest.split_at(len);
    if low >= high {
        return None;
    }
    Some(Edge::from_ordered(UserId::from(low), UserId::from(high)))
}
