//! The extracted time block type.
//!
//! A [`Block`] is a named calendar-date interval taken from one line of a
//! planning document. Blocks are plain data: once built they are never
//! mutated, and no ordering or overlap constraints hold between them.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named date interval extracted from one input line.
///
/// The name is whatever preceded the colon on the line, captured verbatim:
/// it may be empty, contain colons of its own, or carry surrounding
/// whitespace. `end` may lie before `start`; the extractor does not reject
/// such blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Label preceding the colon, verbatim.
    pub name: String,

    /// First day of the interval.
    pub start: NaiveDate,

    /// Last day of the interval.
    pub end: NaiveDate,
}

impl Block {
    /// Create a block directly, bypassing the line parser.
    #[must_use]
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Signed length of the interval, `end - start`.
    ///
    /// Negative when `end` lies before `start`.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Whether `date` falls within the interval, boundaries included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for Block {
    /// Renders the same shape the line parser accepts:
    /// `name: D.M.YYYY - D.M.YYYY`, day and month unpadded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.name,
            self.start.format("%-d.%-m.%Y"),
            self.end.format("%-d.%-m.%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_block_new() {
        let block = Block::new("Vacation", date(2024, 7, 1), date(2024, 7, 14));

        assert_eq!(block.name, "Vacation");
        assert_eq!(block.start, date(2024, 7, 1));
        assert_eq!(block.end, date(2024, 7, 14));
    }

    #[test]
    fn test_duration() {
        let block = Block::new("Vacation", date(2024, 7, 1), date(2024, 7, 14));
        assert_eq!(block.duration(), Duration::days(13));
    }

    #[test]
    fn test_duration_negative_when_reversed() {
        let block = Block::new("Backwards", date(2024, 7, 14), date(2024, 7, 1));
        assert_eq!(block.duration(), Duration::days(-13));
    }

    #[test]
    fn test_contains_boundaries_inclusive() {
        let block = Block::new("Vacation", date(2024, 7, 1), date(2024, 7, 14));

        assert!(block.contains(date(2024, 7, 1)));
        assert!(block.contains(date(2024, 7, 7)));
        assert!(block.contains(date(2024, 7, 14)));
        assert!(!block.contains(date(2024, 6, 30)));
        assert!(!block.contains(date(2024, 7, 15)));
    }

    #[test]
    fn test_display_unpadded() {
        let block = Block::new("Vacation", date(2024, 7, 1), date(2024, 7, 14));
        assert_eq!(block.to_string(), "Vacation: 1.7.2024 - 14.7.2024");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_display_reparses_to_equal_block() {
        let block = Block::new("Team: Planning", date(2024, 1, 1), date(2024, 1, 2));

        let reparsed: Block = block
            .to_string()
            .parse()
            .expect("display output should parse");
        assert_eq!(reparsed, block);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_serialization() {
        let block = Block::new("Vacation", date(2024, 7, 1), date(2024, 7, 14));

        let json = serde_json::to_string(&block).expect("block should serialize");
        assert!(json.contains("\"2024-07-01\""));
        assert!(json.contains("\"2024-07-14\""));

        let deserialized: Block =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(deserialized, block);
    }
}
