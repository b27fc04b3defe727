//! Graph data file loader.
//!
//! The file is a sequence of fixed-shape user records:
//!
//! ```text
//! <username>
//! <name>
//! <location>
//! <website>
//! <bio line>...      (until a literal ENDBIO line)
//! <followee>...      (until a literal END line; the final record may end
//!                     with the file instead)
//! ```
//!
//! Parsing is strictly sequential. The first structural violation aborts
//! the load with a [`Format`](crate::error::TwitterverseError::Format)
//! error; there is no partial recovery.

use tracing::debug;

use crate::error::{Result, TwitterverseError};
use crate::graph::store::SocialGraph;
use crate::loader::cursor::LineCursor;
use crate::types::UserProfile;

/// Bio block terminator.
pub const END_BIO: &str = "ENDBIO";
/// Following block terminator.
pub const END_FOLLOWING: &str = "END";

/// Parse the graph data format into a [`SocialGraph`].
pub fn load_graph(input: &str) -> Result<SocialGraph> {
    let mut cursor = LineCursor::new(input);
    let mut graph = SocialGraph::new();

    while cursor.peek().is_some() {
        let (username, profile) = parse_record(&mut cursor)?;
        graph.insert(username, profile);
    }

    debug!(users = graph.len(), "graph data loaded");
    Ok(graph)
}

/// Parse one user record at the cursor.
fn parse_record(cursor: &mut LineCursor<'_>) -> Result<(String, UserProfile)> {
    let username = cursor.expect_line("a username")?.to_string();
    let name = cursor.expect_line("a name")?.to_string();
    let location = cursor.expect_line("a location")?.to_string();
    let website = cursor.expect_line("a website")?.to_string();

    // Bio lines keep their newlines so embedded line breaks survive into
    // the long report format.
    let mut bio = String::new();
    loop {
        let line = cursor.expect_line(&format!("`{END_BIO}` sentinel"))?;
        if line == END_BIO {
            break;
        }
        bio.push_str(line);
        bio.push('\n');
    }

    // The terminal record may omit the END sentinel at end of file.
    let mut following = Vec::new();
    loop {
        match cursor.next() {
            None => break,
            Some(line) if line == END_FOLLOWING => break,
            Some(line) => {
                if line == END_BIO {
                    return Err(TwitterverseError::format(
                        cursor.line_number(),
                        format!("`{END_BIO}` sentinel inside a following list"),
                    ));
                }
                following.push(line.to_string());
            }
        }
    }

    Ok((
        username,
        UserProfile {
            name,
            location,
            website,
            bio,
            following,
        },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
