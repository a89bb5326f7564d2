#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Extraction of labeled date ranges from free-form text.
//!
//! Scans a planning document line by line for entries of the form
//! `<name>: <start> - <end>`, with dates written as `D.M.YYYY` or
//! `DD.MM.YYYY`, and turns every matching line into a [`Block`].
//!
//! # Key Features
//! - Lenient whole-text extraction via [`generate`]: lines without a labeled
//!   date range are skipped, never reported
//! - Strict per-line parsing via [`FromStr`](std::str::FromStr) on
//!   [`Block`], with typed failure reasons
//! - Input line order preserved; nothing is validated, deduplicated, or
//!   reordered

mod block;
mod error;
mod extract;

pub use block::Block;
pub use error::ParseBlockError;
pub use extract::generate;
