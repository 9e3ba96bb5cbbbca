//! Common utility functions shared across the toolbelt crates.
//!
//! This module provides pure utility functions: no side effects, no I/O.
//! The enumeration normalizer relies on [`number::parse_integer`], so the
//! integer-detection rule lives in exactly one place.

pub mod collections;
pub mod datetime;
pub mod guards;
pub mod number;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use collections::{chunked, group_by, unique};
pub use datetime::{
    format_rfc3339, humanize_duration, parse_datetime, parse_datetime_or, start_of_day,
};
pub use guards::{is_blank, is_integer_str, is_numeric_str, is_present};
pub use number::{clamp_i64, parse_integer, round_to};
pub use string::{capitalize, none_if_empty, some_if_not_empty, truncate_chars, StringExt};
