//! Per-driver aggregation across events
//!
//! A [`Driver`] references the results it took part in and derives its
//! statistics from them on every call. Result lists are short and change
//! only when an event is committed, so nothing is cached.

use std::sync::Arc;

use super::RaceResult;
use crate::{PodiumError, Result};

/// All results of one participant, in event order.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    name: String,
    results: Vec<Arc<RaceResult>>,
}

impl Driver {
    /// Create a driver with no results.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), results: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results(&self) -> &[Arc<RaceResult>] {
        &self.results
    }

    /// Attach a result. Duplicates for the same event are kept.
    pub fn add_result(&mut self, result: Arc<RaceResult>) {
        self.results.push(result);
    }

    /// Sum of laps over all results
    pub fn total_laps(&self) -> u64 {
        self.results.iter().map(|r| u64::from(r.laps())).sum()
    }

    /// Sum of elapsed time over all results, in milliseconds
    pub fn total_time(&self) -> u64 {
        self.results.iter().map(|r| r.time()).sum()
    }

    pub fn number_of_events(&self) -> usize {
        self.results.len()
    }

    /// The result with the most laps, ties going to the lowest time.
    ///
    /// Returns `None` for a driver without results. On a full tie the
    /// earliest result wins.
    pub fn best_result(&self) -> Option<&Arc<RaceResult>> {
        self.results.iter().min_by(|a, b| b.laps().cmp(&a.laps()).then(a.time().cmp(&b.time())))
    }

    /// The result with the lowest best lap time, earliest first on ties.
    pub fn fastest_lap_result(&self) -> Option<&Arc<RaceResult>> {
        self.results.iter().min_by_key(|r| r.best_lap_time())
    }

    /// Fastest lap in milliseconds.
    ///
    /// Fails with [`PodiumError::NoResults`] when the driver holds no results.
    pub fn fastest_lap(&self) -> Result<u64> {
        self.fastest_lap_result()
            .map(|r| r.best_lap_time())
            .ok_or_else(|| PodiumError::no_results(&self.name))
    }
}
