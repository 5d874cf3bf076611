//! Ranking comparators
//!
//! Each comparator sorts "better" first. Drivers without results compare
//! after every driver that has one, so an undefined statistic never outranks
//! a real result.

use std::cmp::Ordering;

use crate::model::{Driver, RaceResult};

/// Most laps first, then lowest elapsed time.
pub fn race_result(a: &RaceResult, b: &RaceResult) -> Ordering {
    b.laps().cmp(&a.laps()).then_with(|| a.time().cmp(&b.time()))
}

/// Drivers by their best single result.
pub fn best_result(a: &Driver, b: &Driver) -> Ordering {
    defined_first(a.best_result(), b.best_result(), |x, y| race_result(x, y))
}

/// Drivers by total laps, then lowest total time.
pub fn cumulative(a: &Driver, b: &Driver) -> Ordering {
    b.total_laps().cmp(&a.total_laps()).then_with(|| a.total_time().cmp(&b.total_time()))
}

/// Drivers by their fastest lap, lowest first.
pub fn fastest_lap(a: &Driver, b: &Driver) -> Ordering {
    defined_first(a.fastest_lap().ok(), b.fastest_lap().ok(), |x, y| x.cmp(&y))
}

fn defined_first<T>(a: Option<T>, b: Option<T>, compare: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
