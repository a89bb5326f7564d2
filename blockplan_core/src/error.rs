//! Error type for line-level block parsing.

use thiserror::Error;

/// Why a single line failed to parse into a [`Block`](crate::Block).
///
/// The lenient extractor maps both variants to a silent skip; only the
/// strict per-line parser surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBlockError {
    /// The line contains no `name: date - date` range.
    #[error("no labeled date range in line")]
    NoMatch,

    /// The date-range tail matched syntactically, but the literal does not
    /// name a real calendar date.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
}
