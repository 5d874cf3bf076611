//! Flat display records built from standings

use serde::Serialize;

use crate::Championship;
use crate::ranking::{Gap, Standing, format_lap_time};

/// One row of a rendered standings table.
///
/// Columns that do not apply to a page are `None` and skipped when serialized.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<String>,
    /// Gap to the leader, empty for the leader
    pub gap: String,
    /// Gap to the entry directly ahead, empty for the leader
    pub person_in_front: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lap_time: Option<String>,
    /// Finishing position of the result shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_placement: Option<u32>,
    /// Number of events driven
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<usize>,
    /// Id of the event the shown result comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_event: Option<u32>,
}

fn gap_text(gap: Option<Gap>) -> String {
    gap.map(|g| g.to_string()).unwrap_or_default()
}

fn base<T>(standing: &Standing<T>, name: &str) -> Row {
    Row {
        position: standing.position,
        name: name.to_string(),
        gap: gap_text(standing.gap),
        person_in_front: gap_text(standing.interval),
        ..Row::default()
    }
}

/// Cumulative standings over all events.
pub fn championship_rows(championship: &Championship) -> Vec<Row> {
    championship
        .cumulative_standings()
        .iter()
        .map(|s| {
            let driver = s.entry;
            Row {
                laps: Some(driver.total_laps()),
                time: Some(format_lap_time(driver.total_time())),
                lap_time: driver.fastest_lap().ok().map(format_lap_time),
                events: Some(driver.number_of_events()),
                ..base(s, driver.name())
            }
        })
        .collect()
}

/// Best single result per driver.
pub fn best_result_rows(championship: &Championship) -> Vec<Row> {
    championship
        .best_result_standings()
        .iter()
        .map(|s| {
            let (driver, best) = s.entry;
            Row {
                laps: Some(u64::from(best.laps())),
                time: Some(format_lap_time(best.time())),
                car: Some(best.car().to_string()),
                lap_time: driver.fastest_lap().ok().map(format_lap_time),
                best_placement: Some(best.position()),
                events: Some(driver.number_of_events()),
                best_event: Some(best.event_id()),
                ..base(s, driver.name())
            }
        })
        .collect()
}

/// Fastest lap per driver.
pub fn fastest_lap_rows(championship: &Championship) -> Vec<Row> {
    championship
        .fastest_lap_standings()
        .iter()
        .map(|s| {
            let (driver, fastest) = s.entry;
            Row {
                car: Some(fastest.car().to_string()),
                lap_time: Some(format_lap_time(fastest.best_lap_time())),
                best_event: Some(fastest.event_id()),
                ..base(s, driver.name())
            }
        })
        .collect()
}

/// Results of the most recent event.
pub fn last_event_rows(championship: &Championship) -> Vec<Row> {
    championship
        .last_event_standings()
        .iter()
        .map(|s| {
            let result = s.entry;
            Row {
                laps: Some(u64::from(result.laps())),
                time: Some(format_lap_time(result.time())),
                car: Some(result.car().to_string()),
                lap_time: Some(format_lap_time(result.best_lap_time())),
                best_placement: Some(result.position()),
                ..base(s, result.driver())
            }
        })
        .collect()
}
