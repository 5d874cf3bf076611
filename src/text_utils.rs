//! Text utilities for timing export preprocessing
//!
//! The timing tool pads every column with spaces and occasionally emits
//! characters its own code page cannot represent. These helpers clean column
//! text without interpreting it.

use crate::{PodiumError, Result};

/// Collapse runs of whitespace into a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop characters the export's single-byte code page cannot represent.
///
/// Control characters are removed as well, except whitespace, which callers
/// collapse afterwards.
pub fn retain_latin1(text: &str) -> String {
    text.chars().filter(|&ch| ch <= '\u{ff}' && (ch.is_whitespace() || !ch.is_control())).collect()
}

/// Canonical form of a driver name.
///
/// Used both when names are parsed and when they are looked up, so
/// `"Max\tPower "` and `"Max Power"` are the same driver.
pub fn normalize_name(text: &str) -> String {
    normalize_whitespace(&retain_latin1(text))
}

/// Slice a fixed-width column by character offsets.
///
/// Returns an empty string when the line ends before `start`. `end` of
/// `None` takes the rest of the line.
pub fn column(line: &str, start: usize, end: Option<usize>) -> String {
    let chars = line.chars().skip(start);
    match end {
        Some(end) => chars.take(end.saturating_sub(start)).collect(),
        None => chars.collect(),
    }
}

/// Parse a padded numeric column, ignoring any whitespace inside it.
pub fn parse_numeric(text: &str, field: &'static str) -> Result<i64> {
    let digits: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(PodiumError::parse_error(field, "column is empty"));
    }

    digits
        .parse::<i64>()
        .map_err(|e| PodiumError::parse_error(field, format!("{:?}: {}", digits, e)))
}
