//! Gap formatting

use std::fmt;

use serde::{Serialize, Serializer};

/// Format milliseconds as `M:SS.mmm`.
///
/// Minutes are unbounded; seconds and milliseconds are zero-padded.
///
/// ```rust
/// use podium::ranking::format_lap_time;
///
/// assert_eq!(format_lap_time(125_000), "2:05.000");
/// assert_eq!(format_lap_time(1), "0:00.001");
/// assert_eq!(format_lap_time(3_723_456), "62:03.456");
/// ```
pub fn format_lap_time(millis: u64) -> String {
    let total_seconds = millis / 1000;
    format!("{}:{:02}.{:03}", total_seconds / 60, total_seconds % 60, millis % 1000)
}

/// Distance between two ranked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Time difference in milliseconds; negative when the entry is ahead
    Time(i64),
    /// Lap difference, used when lap counts differ in a lap-based ranking;
    /// negative when the entry completed more laps
    Laps(i64),
}

impl Gap {
    /// Gap from a `reference` entry to an entry with `laps` and `time`.
    ///
    /// `laps` of `None` (lap-time rankings) always yields a time difference.
    pub fn between(reference: (Option<u64>, u64), entry: (Option<u64>, u64)) -> Self {
        match (reference.0, entry.0) {
            (Some(ref_laps), Some(laps)) if ref_laps != laps => Gap::Laps(signed(ref_laps) - signed(laps)),
            _ => Gap::Time(signed(entry.1) - signed(reference.1)),
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gap::Time(ms) if ms < 0 => write!(f, "-{}", format_lap_time(ms.unsigned_abs())),
            Gap::Time(ms) => f.write_str(&format_lap_time(ms.unsigned_abs())),
            Gap::Laps(n @ (1 | -1)) => write!(f, "{} Lap", n),
            Gap::Laps(n) => write!(f, "{} Laps", n),
        }
    }
}

impl Serialize for Gap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
