//! Line-oriented extraction of labeled date ranges.
//!
//! One pattern, applied independently to every line: a greedy name capture,
//! a colon, then two `D.M.YYYY` literals separated by a hyphen. The pattern
//! is unanchored, so a matching substring anywhere in the line is enough and
//! surrounding unrelated text is ignored.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::block::Block;
use crate::error::ParseBlockError;

/// Pattern for a labeled date range within a line.
///
/// The name capture is greedy: on a line with several colons it absorbs
/// everything up to the last colon that still leaves a valid date-range
/// tail. Digit classes are ASCII, so the pattern checks digit counts only;
/// whether the digits form a real calendar date is checked afterwards.
static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Get the compiled line pattern.
#[expect(clippy::expect_used, reason = "the pattern literal is known valid")]
fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(r"(.*): *([0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}) *- *([0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4})")
            .expect("line pattern is valid")
    })
}

/// Extract every labeled date range from `text`, in input line order.
///
/// Lines are matched independently. A line without a
/// `name: D.M.YYYY - D.M.YYYY` range contributes nothing and raises no
/// error; a line whose range matches syntactically but names an impossible
/// calendar date is dropped the same way, logged at debug level. `\r\n`
/// line endings are handled transparently.
#[must_use]
pub fn generate(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for line in text.lines() {
        match line.parse::<Block>() {
            Ok(block) => blocks.push(block),
            Err(ParseBlockError::NoMatch) => {}
            Err(ParseBlockError::InvalidDate(date)) => {
                debug!("Skipping line with invalid calendar date: {date}");
            }
        }
    }

    blocks
}

impl FromStr for Block {
    type Err = ParseBlockError;

    /// Parse a single line into a block.
    ///
    /// # Errors
    /// [`ParseBlockError::NoMatch`] when the line holds no labeled date
    /// range; [`ParseBlockError::InvalidDate`] when a matched date literal
    /// is not a real calendar date.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = line_pattern()
            .captures(line)
            .ok_or(ParseBlockError::NoMatch)?;

        Ok(Self {
            name: caps[1].to_string(),
            start: parse_date(&caps[2])?,
            end: parse_date(&caps[3])?,
        })
    }
}

/// Parse one `D.M.YYYY` literal into a date, fields read as written.
///
/// The pattern guarantees three ASCII-digit fields, so the only rejection
/// left to chrono is an out-of-range day or month.
fn parse_date(literal: &str) -> Result<NaiveDate, ParseBlockError> {
    let invalid = || ParseBlockError::InvalidDate(literal.to_string());

    let mut fields = literal.split('.');
    let day: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(invalid)?;
    let month: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(invalid)?;
    let year: i32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
