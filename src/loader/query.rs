//! Query file loader.
//!
//! ```text
//! SEARCH
//! <start username>
//! <operation>...     (literal `following` / `followers`, until FILTER)
//! FILTER
//! <filter line>...   (until PRESENT)
//! PRESENT
//! sort-by <username|name|popularity>
//! format <short|long>
//! ```
//!
//! Filter lines are matched by substring containment against the four
//! filter-type tokens; the predicate value is the remainder of the line
//! after the token, trimmed. When several lines match the same token the
//! last one wins, and lines matching no token are ignored. This mirrors
//! the historical format exactly, so by construction a filter value must
//! not embed a different filter's token.

use tracing::debug;

use crate::error::{Result, TwitterverseError};
use crate::loader::cursor::LineCursor;
use crate::types::{FilterSpec, OutputFormat, Query, SortKey, TraversalOp};

const SEARCH: &str = "SEARCH";
const FILTER: &str = "FILTER";
const PRESENT: &str = "PRESENT";

const NAME_TOKEN: &str = "name-includes";
const LOCATION_TOKEN: &str = "location-includes";
const FOLLOWER_TOKEN: &str = "follower";
const FOLLOWING_TOKEN: &str = "following";

/// Parse the query format into a [`Query`].
pub fn load_query(input: &str) -> Result<Query> {
    let mut cursor = LineCursor::new(input);

    cursor.expect_sentinel(SEARCH)?;
    let start = cursor.expect_line("a start username")?.to_string();

    // SEARCH operations run until the FILTER sentinel.
    let mut operations = Vec::new();
    loop {
        let line = cursor.expect_line(&format!("`{FILTER}` sentinel"))?;
        if line == FILTER {
            break;
        }
        match TraversalOp::from_str(line) {
            Some(op) => operations.push(op),
            None => {
                return Err(TwitterverseError::format(
                    cursor.line_number(),
                    format!("unknown search operation `{line}`"),
                ))
            }
        }
    }

    // FILTER lines run until the PRESENT sentinel.
    let mut filter_lines = Vec::new();
    loop {
        let line = cursor.expect_line(&format!("`{PRESENT}` sentinel"))?;
        if line == PRESENT {
            break;
        }
        filter_lines.push(line);
    }
    let filters = FilterSpec {
        name: match_filter(&filter_lines, NAME_TOKEN),
        location: match_filter(&filter_lines, LOCATION_TOKEN),
        follower: match_filter(&filter_lines, FOLLOWER_TOKEN),
        following: match_filter(&filter_lines, FOLLOWING_TOKEN),
    };

    let sort_by = parse_directive(&mut cursor, "sort-by", SortKey::from_str)?;
    let format = parse_directive(&mut cursor, "format", OutputFormat::from_str)?;

    debug!(
        start = %start,
        ops = operations.len(),
        sort_by = sort_by.as_str(),
        format = format.as_str(),
        "query loaded"
    );

    Ok(Query {
        start,
        operations,
        filters,
        sort_by,
        format,
    })
}

/// Last filter line containing `token`, with the remainder after the token
/// trimmed as the predicate value.
fn match_filter(lines: &[&str], token: &str) -> Option<String> {
    let mut value = None;
    for line in lines {
        if let Some(pos) = line.find(token) {
            value = Some(line[pos + token.len()..].trim().to_string());
        }
    }
    value
}

/// Parse a trailing `<keyword> <value>` directive line.
fn parse_directive<T>(
    cursor: &mut LineCursor<'_>,
    keyword: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let line = cursor.expect_line(&format!("a `{keyword}` line"))?;
    let value = line.strip_prefix(keyword).map(str::trim).ok_or_else(|| {
        TwitterverseError::format(
            cursor.line_number(),
            format!("expected a `{keyword}` line, found `{line}`"),
        )
    })?;
    parse(value).ok_or_else(|| {
        TwitterverseError::format(
            cursor.line_number(),
            format!("unknown {keyword} value `{value}`"),
        )
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
