//! Core domain types for Twitterverse.
//!
//! The flat-file formats are fixed and tiny, so everything here is a plain
//! owned struct or a small enum with an explicit string mapping.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// One user record from the graph data file.
///
/// `bio` keeps each source line's trailing newline (the `ENDBIO` sentinel is
/// excluded). `following` keeps file order and may reference usernames that
/// never appear as records of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    pub website: String,
    pub bio: String,
    pub following: Vec<String>,
}

// ---------------------------------------------------------------------------
// TraversalOp
// ---------------------------------------------------------------------------

/// One hop of the `SEARCH` section: expand to followees or to followers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOp {
    Following,
    Followers,
}

impl TraversalOp {
    /// Map an operation line to an op. Returns `None` for anything other
    /// than the two literal tokens.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "following" => Some(Self::Following),
            "followers" => Some(Self::Followers),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Following => "following",
            Self::Followers => "followers",
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// Active filter predicates from the `FILTER` section. Each is optional;
/// an unset predicate is a pass-through stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// `name-includes` — despite the token, matches the *username* by
    /// case-insensitive equality. Kept as-is from the source format.
    pub name: Option<String>,
    /// `location-includes` — case-insensitive equality on profile location.
    pub location: Option<String>,
    /// `follower` — keep candidates whose following list contains the value.
    pub follower: Option<String>,
    /// `following` — keep followers of candidates that are themselves
    /// candidates. The value is parsed but not consulted by the stage.
    pub following: Option<String>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.follower.is_none()
            && self.following.is_none()
    }
}

// ---------------------------------------------------------------------------
// SortKey / OutputFormat
// ---------------------------------------------------------------------------

/// `sort-by` value of the `PRESENT` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Username,
    Name,
    Popularity,
}

impl SortKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "username" => Some(Self::Username),
            "name" => Some(Self::Name),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::Popularity => "popularity",
        }
    }
}

/// `format` value of the `PRESENT` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Short,
    Long,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A fully parsed query file: where to start, how to hop, what to keep,
/// and how to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub start: String,
    pub operations: Vec<TraversalOp>,
    pub filters: FilterSpec,
    pub sort_by: SortKey,
    pub format: OutputFormat,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
