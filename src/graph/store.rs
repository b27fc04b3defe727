//! In-memory social graph keyed by username.
//!
//! Only following edges are stored; a follower relationship is the inverse,
//! computed on demand by scanning every profile. The map is
//! insertion-ordered so follower scans are deterministic, but callers must
//! not rely on anything beyond deduplication of scan output.

use indexmap::IndexMap;

use crate::types::UserProfile;

/// Username → profile map, built once by the loader and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    users: IndexMap<String, UserProfile>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile. A duplicate username replaces the earlier profile
    /// and keeps its original position.
    pub fn insert(&mut self, username: String, profile: UserProfile) {
        self.users.insert(username, profile);
    }

    /// Look up a profile, `None` for usernames absent from the graph.
    pub fn profile(&self, username: &str) -> Option<&UserProfile> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Usernames in insertion order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Every user whose following list contains `username`, in graph
    /// iteration order. Works for usernames absent from the graph too:
    /// the scan returns whoever lists the dangling name.
    pub fn followers(&self, username: &str) -> Vec<&str> {
        self.users
            .iter()
            .filter(|(_, profile)| profile.following.iter().any(|f| f == username))
            .map(|(follower, _)| follower.as_str())
            .collect()
    }

    /// Follower count of `username` — the popularity comparator's key.
    pub fn popularity(&self, username: &str) -> usize {
        self.followers(username).len()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(following: &[&str]) -> UserProfile {
        UserProfile {
            following: following.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn graph(entries: &[(&str, &[&str])]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for (username, following) in entries {
            g.insert(username.to_string(), profile(following));
        }
        g
    }

    #[test]
    fn followers_scans_all_following_lists() {
        let g = graph(&[
            ("PerezHilton", &["tomCruise", "katieH", "NicoleKidman"]),
            ("tomCruise", &["katieH", "NicoleKidman"]),
            ("tomfan", &["tomCruise"]),
        ]);
        assert_eq!(g.followers("katieH"), vec!["PerezHilton", "tomCruise"]);
        assert_eq!(g.followers("tomCruise"), vec!["PerezHilton", "tomfan"]);
    }

    #[test]
    fn followers_of_unlisted_user_is_empty() {
        let g = graph(&[("a", &["b"])]);
        assert!(g.followers("nobody").is_empty());
    }

    #[test]
    fn followers_includes_listers_of_dangling_names() {
        // "ghost" has no record, but someone follows the name anyway.
        let g = graph(&[("a", &["ghost"])]);
        assert_eq!(g.followers("ghost"), vec!["a"]);
    }

    #[test]
    fn popularity_counts_followers() {
        let g = graph(&[("a", &["c"]), ("b", &["c"]), ("c", &[])]);
        assert_eq!(g.popularity("c"), 2);
        assert_eq!(g.popularity("a"), 0);
    }

    #[test]
    fn usernames_iterate_in_insertion_order() {
        let g = graph(&[("z", &[]), ("a", &[]), ("m", &[])]);
        let names: Vec<_> = g.usernames().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
