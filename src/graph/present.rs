//! Ranking and report rendering.
//!
//! Candidates are stably sorted by the query's comparator and rendered as
//! either a one-line list literal (`short`) or per-user record blocks
//! separated by dashed lines (`long`).

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, TwitterverseError};
use crate::graph::store::SocialGraph;
use crate::types::{OutputFormat, SortKey, UserProfile};

const SEPARATOR: &str = "----------";

/// Sort `candidates` by `sort_by` and render them as `format`.
///
/// Every candidate must have a graph record; presentation does not
/// tolerate dangling references and fails with
/// [`UnknownUser`](TwitterverseError::UnknownUser) before rendering
/// anything.
pub fn present(
    graph: &SocialGraph,
    mut candidates: Vec<String>,
    sort_by: SortKey,
    format: OutputFormat,
) -> Result<String> {
    for candidate in &candidates {
        if !graph.contains(candidate) {
            return Err(TwitterverseError::UnknownUser(candidate.clone()));
        }
    }

    sort_candidates(graph, &mut candidates, sort_by);
    debug!(
        candidates = candidates.len(),
        sort_by = sort_by.as_str(),
        format = format.as_str(),
        "rendering report"
    );

    Ok(match format {
        OutputFormat::Short => render_list(&candidates),
        OutputFormat::Long => render_long(graph, &candidates),
    })
}

/// Stable sort by the chosen comparator. `slice::sort_by` is stable, which
/// is all the report contract requires of the ordering.
fn sort_candidates(graph: &SocialGraph, candidates: &mut [String], sort_by: SortKey) {
    match sort_by {
        SortKey::Username => candidates.sort_by(|a, b| a.cmp(b)),
        SortKey::Name => candidates.sort_by(|a, b| {
            let a_name = display_name(graph, a);
            let b_name = display_name(graph, b);
            a_name.cmp(b_name).then_with(|| a.cmp(b))
        }),
        SortKey::Popularity => {
            // Follower counts are scans; compute each candidate's once.
            let popularity: HashMap<String, usize> = candidates
                .iter()
                .map(|c| (c.clone(), graph.popularity(c)))
                .collect();
            candidates.sort_by(|a, b| {
                let a_pop = popularity.get(a.as_str()).copied().unwrap_or(0);
                let b_pop = popularity.get(b.as_str()).copied().unwrap_or(0);
                match b_pop.cmp(&a_pop) {
                    Ordering::Equal => a.cmp(b),
                    unequal => unequal,
                }
            });
        }
    }
}

fn display_name<'g>(graph: &'g SocialGraph, username: &str) -> &'g str {
    graph
        .profile(username)
        .map(|p| p.name.as_str())
        .unwrap_or("")
}

/// Single-quoted list literal, the historical report format.
fn render_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn render_long(graph: &SocialGraph, candidates: &[String]) -> String {
    let mut out = String::new();
    for username in candidates {
        // Presence was checked up front.
        let Some(profile) = graph.profile(username) else {
            continue;
        };
        out.push_str(&render_block(username, profile));
    }
    out.push_str(SEPARATOR);
    out
}

fn render_block(username: &str, profile: &UserProfile) -> String {
    format!(
        "{SEPARATOR}\n{username}\nname: {}\nlocation: {}\nwebsite: {}\nbio:\n{}\nfollowing: {}\n",
        profile.name,
        profile.location,
        profile.website,
        profile.bio,
        render_list(&profile.following),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(entries: &[(&str, &str, &[&str])]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for (username, name, following) in entries {
            g.insert(
                username.to_string(),
                UserProfile {
                    name: name.to_string(),
                    following: following.iter().map(|s| s.to_string()).collect(),
                    ..Default::default()
                },
            );
        }
        g
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // -- sorting ------------------------------------------------------------

    #[test]
    fn sorts_by_username_lexicographically() {
        let g = named(&[("c", "", &[]), ("a", "", &[]), ("b", "", &[])]);
        let out = present(&g, names(&["c", "a", "b"]), SortKey::Username, OutputFormat::Short)
            .unwrap();
        assert_eq!(out, "['a', 'b', 'c']");
    }

    #[test]
    fn sorts_by_name_with_username_tiebreak() {
        // Byte ordering: "Lee" < "Zed" < "anna" (uppercase before lowercase).
        let g = named(&[("a", "Zed", &[]), ("b", "Lee", &[]), ("c", "anna", &[])]);
        let out =
            present(&g, names(&["c", "a", "b"]), SortKey::Name, OutputFormat::Short).unwrap();
        assert_eq!(out, "['b', 'a', 'c']");
    }

    #[test]
    fn name_ties_fall_back_to_username() {
        let g = named(&[("b", "Sam", &[]), ("a", "Sam", &[])]);
        let out =
            present(&g, names(&["b", "a"]), SortKey::Name, OutputFormat::Short).unwrap();
        assert_eq!(out, "['a', 'b']");
    }

    #[test]
    fn sorts_by_popularity_descending() {
        // c has 2 followers, b has 1, a has 0.
        let g = named(&[
            ("a", "", &["c", "b"]),
            ("b", "", &["c"]),
            ("c", "", &[]),
        ]);
        let out = present(
            &g,
            names(&["a", "b", "c"]),
            SortKey::Popularity,
            OutputFormat::Short,
        )
        .unwrap();
        assert_eq!(out, "['c', 'b', 'a']");
    }

    #[test]
    fn equal_popularity_falls_back_to_username() {
        let g = named(&[("b", "", &[]), ("a", "", &[]), ("c", "", &[])]);
        let out = present(
            &g,
            names(&["b", "c", "a"]),
            SortKey::Popularity,
            OutputFormat::Short,
        )
        .unwrap();
        assert_eq!(out, "['a', 'b', 'c']");
    }

    #[test]
    fn sorting_an_already_sorted_list_is_stable() {
        let g = named(&[("a", "Sam", &[]), ("b", "Sam", &[])]);
        let sorted = names(&["a", "b"]);
        let out = present(&g, sorted, SortKey::Name, OutputFormat::Short).unwrap();
        assert_eq!(out, "['a', 'b']");
    }

    // -- rendering ----------------------------------------------------------

    #[test]
    fn short_format_is_a_list_literal() {
        let g = named(&[("a", "", &[])]);
        let out = present(&g, names(&["a"]), SortKey::Username, OutputFormat::Short).unwrap();
        assert_eq!(out, "['a']");
    }

    #[test]
    fn short_format_of_no_candidates_is_an_empty_list() {
        let g = SocialGraph::new();
        let out = present(&g, vec![], SortKey::Username, OutputFormat::Short).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn long_format_renders_record_blocks() {
        let mut g = SocialGraph::new();
        g.insert(
            "tomCruise".into(),
            UserProfile {
                name: "Tom Cruise".into(),
                location: "Los Angeles, CA".into(),
                website: "http://www.tomcruise.com".into(),
                bio: "Official TomCruise.com crew tweets.\n".into(),
                following: vec!["katieH".into(), "NicoleKidman".into()],
            },
        );
        let out = present(
            &g,
            names(&["tomCruise"]),
            SortKey::Username,
            OutputFormat::Long,
        )
        .unwrap();
        assert_eq!(
            out,
            "----------\n\
             tomCruise\n\
             name: Tom Cruise\n\
             location: Los Angeles, CA\n\
             website: http://www.tomcruise.com\n\
             bio:\n\
             Official TomCruise.com crew tweets.\n\
             \n\
             following: ['katieH', 'NicoleKidman']\n\
             ----------"
        );
    }

    #[test]
    fn long_format_of_no_candidates_is_a_single_separator() {
        let g = SocialGraph::new();
        let out = present(&g, vec![], SortKey::Username, OutputFormat::Long).unwrap();
        assert_eq!(out, "----------");
    }

    #[test]
    fn long_format_keeps_empty_bio_blank_line() {
        let g = named(&[("u", "U", &[])]);
        let out = present(&g, names(&["u"]), SortKey::Username, OutputFormat::Long).unwrap();
        assert!(out.contains("bio:\n\nfollowing: []"));
    }

    // -- dangling candidates ------------------------------------------------

    #[test]
    fn unknown_candidate_fails_before_rendering() {
        let g = named(&[("a", "", &[])]);
        let err = present(&g, names(&["a", "ghost"]), SortKey::Username, OutputFormat::Short)
            .unwrap_err();
        assert!(matches!(err, TwitterverseError::UnknownUser(u) if u == "ghost"));
    }

    #[test]
    fn unknown_candidate_fails_even_for_short_username_reports() {
        // Short + username never dereferences profiles, but presentation
        // still rejects dangling candidates up front.
        let g = SocialGraph::new();
        let err =
            present(&g, names(&["ghost"]), SortKey::Username, OutputFormat::Short).unwrap_err();
        assert!(matches!(err, TwitterverseError::UnknownUser(_)));
    }
}
