//! Championship aggregation root
//!
//! The [`Championship`] owns the committed events and the drivers built from
//! their results. It is rebuilt from scratch on every parse of the timing
//! export; nothing is updated in place across parses.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use podium::{Championship, RaceResult, RaceResultFields};
//!
//! let mut championship = Championship::new("Winter Cup", NaiveDate::default());
//!
//! let mut event = championship.create_event();
//! event.add_race_result(RaceResult::new(RaceResultFields {
//!     position: 1,
//!     driver: "Ada".to_string(),
//!     laps: 50,
//!     time: 3_600_000,
//!     best_lap_time: 71_000,
//!     ..Default::default()
//! })?);
//! championship.add_result(event)?;
//!
//! assert_eq!(championship.event(1)?.name(), "Grand Prix 1");
//! assert_eq!(championship.event_index(), 2);
//! # Ok::<(), podium::PodiumError>(())
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::model::{Driver, Event, RaceResult};
use crate::ranking::order;
use crate::text_utils::normalize_name;
use crate::{PodiumError, Result};

/// Aggregation root for one championship.
#[derive(Debug, Clone, PartialEq)]
pub struct Championship {
    name: String,
    date: NaiveDate,
    events: Vec<Event>,
    /// Drivers in order of first appearance
    drivers: Vec<Driver>,
    /// Normalized name -> index into `drivers`
    index: HashMap<String, usize>,
}

impl Championship {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date, events: Vec::new(), drivers: Vec::new(), index: HashMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Committed events in creation order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drivers in order of first appearance
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Allocate the next event.
    ///
    /// The event is not registered until it is passed to [`add_result`](Self::add_result).
    pub fn create_event(&self) -> Event {
        Event::new(self.next_event_id(), self.date)
    }

    /// Commit an event and attach its results to their drivers.
    ///
    /// Every driver name is checked before anything is modified, so a
    /// rejected event leaves the championship unchanged.
    pub fn add_result(&mut self, event: Event) -> Result<()> {
        let expected = self.next_event_id();
        if event.id() != expected {
            return Err(PodiumError::EventOutOfSequence { expected, found: event.id() });
        }

        let keys = event
            .results()
            .iter()
            .map(|r| driver_key(r.driver()))
            .collect::<Result<Vec<_>>>()?;

        for (key, result) in keys.into_iter().zip(event.results()) {
            let slot = self.slot_for(key);
            self.drivers[slot].add_result(Arc::clone(result));
        }

        debug!(
            event = event.id(),
            results = event.results().len(),
            drivers = self.drivers.len(),
            "Committed event"
        );
        self.events.push(event);
        Ok(())
    }

    /// Look up a driver by name without creating one.
    pub fn find_driver(&self, name: &str) -> Result<Option<&Driver>> {
        let key = driver_key(name)?;
        Ok(self.index.get(&key).map(|&slot| &self.drivers[slot]))
    }

    /// Look up a driver by name, registering an empty one if absent.
    pub fn get_or_create_driver(&mut self, name: &str) -> Result<&mut Driver> {
        let key = driver_key(name)?;
        let slot = self.slot_for(key);
        Ok(&mut self.drivers[slot])
    }

    /// All drivers ordered by their best single result.
    ///
    /// Drivers without results sort last.
    pub fn driver_results(&self) -> Vec<&Driver> {
        self.driver_results_by(order::best_result)
    }

    /// All drivers ordered by a caller-supplied comparator.
    ///
    /// The sort is stable: equal drivers keep their order of first appearance.
    pub fn driver_results_by<F>(&self, mut compare: F) -> Vec<&Driver>
    where
        F: FnMut(&Driver, &Driver) -> Ordering,
    {
        let mut drivers: Vec<&Driver> = self.drivers.iter().collect();
        drivers.sort_by(|a, b| compare(a, b));
        drivers
    }

    /// Each driver's best single result, most laps first then lowest time.
    pub fn race_results(&self) -> Vec<&Arc<RaceResult>> {
        self.race_results_by(order::race_result)
    }

    /// Each driver's best single result, ordered by `compare`.
    ///
    /// Drivers without results contribute nothing.
    pub fn race_results_by<F>(&self, mut compare: F) -> Vec<&Arc<RaceResult>>
    where
        F: FnMut(&RaceResult, &RaceResult) -> Ordering,
    {
        let mut results: Vec<_> = self.drivers.iter().filter_map(Driver::best_result).collect();
        results.sort_by(|a, b| compare(a, b));
        results
    }

    /// Results of the most recent event, most laps first then lowest time.
    ///
    /// Empty when no event has been committed.
    pub fn last_event_results(&self) -> Vec<&Arc<RaceResult>> {
        let Some(event) = self.events.last() else {
            return Vec::new();
        };

        let mut results: Vec<_> = event.results().iter().collect();
        results.sort_by(|a, b| order::race_result(a, b));
        results
    }

    /// Id the next created event will get
    pub fn event_index(&self) -> usize {
        self.events.len() + 1
    }

    /// 1-based event lookup.
    pub fn event(&self, index: usize) -> Result<&Event> {
        if index < 1 || index > self.events.len() {
            return Err(PodiumError::event_out_of_range(index, self.events.len()));
        }
        Ok(&self.events[index - 1])
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.events.last()
    }

    fn next_event_id(&self) -> u32 {
        u32::try_from(self.event_index()).unwrap_or(u32::MAX)
    }

    fn slot_for(&mut self, key: String) -> usize {
        if let Some(&slot) = self.index.get(&key) {
            return slot;
        }

        trace!(driver = %key, "Registering driver");
        let slot = self.drivers.len();
        self.drivers.push(Driver::new(key.clone()));
        self.index.insert(key, slot);
        slot
    }
}

fn driver_key(name: &str) -> Result<String> {
    let key = normalize_name(name);
    if key.is_empty() {
        return Err(PodiumError::invalid_name(name));
    }
    Ok(key)
}
