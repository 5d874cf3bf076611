//! Grand Prix events

use std::sync::Arc;

use chrono::NaiveDate;

use super::RaceResult;

/// One timed session of a championship.
///
/// Events are created by [`Championship::create_event`](crate::Championship::create_event),
/// filled during ingestion and frozen once committed. Results are shared with the
/// drivers that hold them.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: u32,
    name: String,
    date: NaiveDate,
    location: String,
    results: Vec<Arc<RaceResult>>,
}

impl Event {
    pub(crate) fn new(id: u32, date: NaiveDate) -> Self {
        Self { id, name: format!("Grand Prix {}", id), date, location: String::new(), results: Vec::new() }
    }

    /// 1-based id, assigned in creation order
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Results in parse order
    pub fn results(&self) -> &[Arc<RaceResult>] {
        &self.results
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Append a result. Its event id is rewritten to this event's id.
    pub fn add_race_result(&mut self, mut result: RaceResult) {
        result.set_event_id(self.id);
        self.results.push(Arc::new(result));
    }
}
