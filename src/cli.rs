//! Command-line interface and pipeline driver.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::error::Result;
use crate::graph::{filter, present, traversal};
use crate::loader;

/// Query a flat-file social graph and print a textual report.
#[derive(Debug, Parser)]
#[command(name = "twitterverse", version, about)]
pub struct Cli {
    /// Path to the graph data file
    pub data_file: PathBuf,
    /// Path to the query file
    pub query_file: PathBuf,
}

/// Run the full pipeline for a pair of input files and return the report.
///
/// Both files are read whole up front; nothing is streamed and no handle
/// outlives the read.
pub fn run(data_file: &Path, query_file: &Path) -> Result<String> {
    let data = std::fs::read_to_string(data_file)?;
    let graph = loader::load_graph(&data)?;
    info!(users = graph.len(), path = %data_file.display(), "graph loaded");

    let query_text = std::fs::read_to_string(query_file)?;
    let query = loader::load_query(&query_text)?;
    info!(start = %query.start, ops = query.operations.len(), "query loaded");

    let candidates = traversal::search(&graph, &query.start, &query.operations);
    let survivors = filter::filter(&graph, candidates, &query.filters)?;
    present::present(&graph, survivors, query.sort_by, query.format)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_two_positional_paths() {
        let cli = Cli::parse_from(["twitterverse", "data.txt", "query.txt"]);
        assert_eq!(cli.data_file, PathBuf::from("data.txt"));
        assert_eq!(cli.query_file, PathBuf::from("query.txt"));
    }

    #[test]
    fn run_fails_on_missing_data_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let query = dir.path().join("query.txt");
        std::fs::write(&query, "SEARCH\nu\nFILTER\nPRESENT\nsort-by username\nformat short\n")
            .unwrap();
        assert!(run(&missing, &query).is_err());
    }
}
