//! Twitterverse — social-graph query engine.
//!
//! Loads a flat-file social graph and a flat-file query, expands the query's
//! traversal hops over the graph, narrows the result through a predicate
//! filter chain, and renders a sorted textual report.

pub mod cli;
pub mod error;
pub mod graph;
pub mod loader;
pub mod observability;
pub mod types;
