//! Hop expansion over the social graph.
//!
//! A search starts from a single username and applies each operation
//! left-to-right. Every hop replaces the whole candidate set: `following`
//! expands to the union of the members' following lists, `followers` to
//! the union of their computed follower sets. Unions deduplicate in
//! first-seen order.

use tracing::debug;

use crate::graph::store::SocialGraph;
use crate::types::TraversalOp;

/// Expand `start` through `operations`. An empty operation list yields
/// exactly `[start]`. Members without a graph record contribute an empty
/// neighbor set instead of failing.
pub fn search(graph: &SocialGraph, start: &str, operations: &[TraversalOp]) -> Vec<String> {
    let mut current = vec![start.to_string()];
    for op in operations {
        current = hop(graph, &current, *op);
        debug!(op = op.as_str(), members = current.len(), "traversal hop");
    }
    current
}

/// Apply one hop to the current member set.
fn hop(graph: &SocialGraph, members: &[String], op: TraversalOp) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for member in members {
        match op {
            TraversalOp::Following => {
                let followees = graph
                    .profile(member)
                    .map(|p| p.following.as_slice())
                    .unwrap_or(&[]);
                for followee in followees {
                    if !out.iter().any(|seen| seen == followee) {
                        out.push(followee.clone());
                    }
                }
            }
            TraversalOp::Followers => {
                for follower in graph.followers(member) {
                    if !out.iter().any(|seen| seen == follower) {
                        out.push(follower.to_string());
                    }
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
