//! Predicate filter chain.
//!
//! Stages run in a fixed order — name, location, follower, following —
//! each consuming the previous stage's output. An unset predicate is a
//! pass-through. Two stages reproduce long-standing quirks of the query
//! format on purpose (see the stage docs); changing them would change
//! query results in the wild.

use tracing::debug;

use crate::error::{Result, TwitterverseError};
use crate::graph::store::SocialGraph;
use crate::types::FilterSpec;

/// Run the filter chain over `candidates`.
///
/// The name stage needs no profile access; the location and follower
/// stages read candidate profiles and fail with
/// [`UnknownUser`](TwitterverseError::UnknownUser) on a candidate absent
/// from the graph. The following stage only scans the graph and tolerates
/// unknown candidates.
pub fn filter(
    graph: &SocialGraph,
    candidates: Vec<String>,
    filters: &FilterSpec,
) -> Result<Vec<String>> {
    let mut survivors = candidates;

    // Name stage: username equality, ASCII-case-insensitive. The token is
    // `name-includes`, but the historical semantics are equality on the
    // username, not a substring match on the display name.
    if let Some(name) = &filters.name {
        survivors.retain(|candidate| candidate.eq_ignore_ascii_case(name));
        debug!(stage = "name", survivors = survivors.len());
    }

    // Location stage: profile location equality, ASCII-case-insensitive.
    if let Some(location) = &filters.location {
        let mut kept = Vec::new();
        for candidate in survivors {
            let profile = graph
                .profile(&candidate)
                .ok_or_else(|| TwitterverseError::UnknownUser(candidate.clone()))?;
            if profile.location.eq_ignore_ascii_case(location) {
                kept.push(candidate);
            }
        }
        survivors = kept;
        debug!(stage = "location", survivors = survivors.len());
    }

    // Follower stage: keep a candidate once per following-list entry equal
    // to the predicate value, so a duplicated entry duplicates the
    // candidate. Ordinarily each candidate appears at most once.
    if let Some(follower) = &filters.follower {
        let mut kept = Vec::new();
        for candidate in survivors {
            let profile = graph
                .profile(&candidate)
                .ok_or_else(|| TwitterverseError::UnknownUser(candidate.clone()))?;
            for entry in &profile.following {
                if entry == follower {
                    kept.push(candidate.clone());
                }
            }
        }
        survivors = kept;
        debug!(stage = "follower", survivors = survivors.len());
    }

    // Following stage: the predicate value is not consulted. For each
    // surviving candidate, keep its followers that are themselves
    // surviving candidates. Membership in the candidate set drives the
    // result, so this stage can both add and drop usernames.
    if filters.following.is_some() {
        let mut kept = Vec::new();
        for candidate in &survivors {
            for follower in graph.followers(candidate) {
                if survivors.iter().any(|c| c == follower) {
                    kept.push(follower.to_string());
                }
            }
        }
        survivors = kept;
        debug!(stage = "following", survivors = survivors.len());
    }

    Ok(survivors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
