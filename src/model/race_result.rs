//! A single driver's outcome in one event

use std::fmt;

use crate::text_utils::{normalize_name, normalize_whitespace};
use crate::{PodiumError, Result};

/// Raw field set for one result, as decoded from an export line.
///
/// Numeric fields are signed so that out-of-range input reaches validation
/// instead of failing to decode.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RaceResultFields {
    pub position: i64,
    pub driver: String,
    pub laps: i64,
    pub time: i64,
    pub car: String,
    pub best_lap_time: i64,
    pub event_id: i64,
}

/// Single-field update applied through [`RaceResult::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Position(i64),
    Driver(String),
    Laps(i64),
    Time(i64),
    Car(String),
    BestLapTime(i64),
    EventId(i64),
}

/// One driver's result in one event.
///
/// Times are in milliseconds. Every value is validated on construction and
/// on every [`update`](Self::update); a rejected update leaves the record
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceResult {
    position: u32,
    driver: String,
    laps: u32,
    time: u64,
    car: String,
    best_lap_time: u64,
    event_id: u32,
}

impl RaceResult {
    /// Validate a decoded field set and build the result.
    pub fn new(fields: RaceResultFields) -> Result<Self> {
        Ok(Self {
            position: validate_position(fields.position)?,
            driver: validate_driver(&fields.driver)?,
            laps: validate_count("laps", fields.laps)?,
            time: validate_millis("time", fields.time)?,
            car: normalize_whitespace(&fields.car),
            best_lap_time: validate_millis("best_lap_time", fields.best_lap_time)?,
            event_id: validate_count("event_id", fields.event_id)?,
        })
    }

    /// Replace one field after validating the new value.
    pub fn update(&mut self, update: FieldUpdate) -> Result<()> {
        match update {
            FieldUpdate::Position(value) => self.position = validate_position(value)?,
            FieldUpdate::Driver(value) => self.driver = validate_driver(&value)?,
            FieldUpdate::Laps(value) => self.laps = validate_count("laps", value)?,
            FieldUpdate::Time(value) => self.time = validate_millis("time", value)?,
            FieldUpdate::Car(value) => self.car = normalize_whitespace(&value),
            FieldUpdate::BestLapTime(value) => {
                self.best_lap_time = validate_millis("best_lap_time", value)?
            }
            FieldUpdate::EventId(value) => self.event_id = validate_count("event_id", value)?,
        }
        Ok(())
    }

    /// Finishing position, starting at 1
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Normalized driver name
    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Elapsed race time in milliseconds
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Car name, possibly empty
    pub fn car(&self) -> &str {
        &self.car
    }

    /// Best lap of the event in milliseconds
    pub fn best_lap_time(&self) -> u64 {
        self.best_lap_time
    }

    /// Id of the event this result belongs to
    pub fn event_id(&self) -> u32 {
        self.event_id
    }

    pub(crate) fn set_event_id(&mut self, event_id: u32) {
        self.event_id = event_id;
    }
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Race(Position: {}, Driver: {}, Laps: {}, Time: {}, Car: {}, Best Lap Time: {}, Event: {})",
            self.position,
            self.driver,
            self.laps,
            self.time,
            self.car,
            self.best_lap_time,
            self.event_id
        )
    }
}

fn validate_position(value: i64) -> Result<u32> {
    if value < 1 {
        return Err(PodiumError::invalid_field("position", "must be at least 1"));
    }
    u32::try_from(value).map_err(|_| PodiumError::invalid_field("position", "too large"))
}

fn validate_driver(value: &str) -> Result<String> {
    let name = normalize_name(value);
    if name.is_empty() {
        return Err(PodiumError::invalid_name(value));
    }
    Ok(name)
}

fn validate_count(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(PodiumError::invalid_field(field, "cannot be negative"));
    }
    u32::try_from(value).map_err(|_| PodiumError::invalid_field(field, "too large"))
}

fn validate_millis(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| PodiumError::invalid_field(field, "cannot be negative"))
}
