//! Sequential line cursor over an input text.
//!
//! Both flat-file formats are positional with sentinel-delimited
//! variable-length blocks, so the loaders walk the input record-by-record
//! through this cursor rather than indexing into a line array.

use crate::error::{Result, TwitterverseError};

/// Forward-only cursor over the lines of an input string.
///
/// Tracks a 1-based line number for error reporting. `\r\n` endings are
/// normalized away by [`str::lines`].
pub struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    /// Line number of the most recently consumed line (0 before any read).
    pos: usize,
    peeked: Option<Option<&'a str>>,
}

impl<'a> LineCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            pos: 0,
            peeked: None,
        }
    }

    /// 1-based number of the last consumed line.
    pub fn line_number(&self) -> usize {
        self.pos
    }

    /// Consume the next line, or `None` at end of input.
    pub fn next(&mut self) -> Option<&'a str> {
        let line = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.lines.next(),
        };
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// Look at the next line without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lines.next());
        }
        self.peeked.unwrap_or(None)
    }

    /// Consume the next line, erroring with `what` if the input is truncated.
    pub fn expect_line(&mut self, what: &str) -> Result<&'a str> {
        self.next().ok_or_else(|| {
            TwitterverseError::format(self.pos + 1, format!("unexpected end of input, expected {what}"))
        })
    }

    /// Consume the next line and require it to equal `sentinel` exactly.
    pub fn expect_sentinel(&mut self, sentinel: &str) -> Result<()> {
        let line = self.expect_line(&format!("`{sentinel}` sentinel"))?;
        if line != sentinel {
            return Err(TwitterverseError::format(
                self.pos,
                format!("expected `{sentinel}` sentinel, found `{line}`"),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
