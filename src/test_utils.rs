//! Test utilities for building results, championships and timing exports
//!
//! These helpers are shared by unit tests, integration tests and benchmarks so
//! that every test describes its data the same way.

#![cfg(any(test, feature = "benchmark"))]

use chrono::NaiveDate;

use crate::Championship;
use crate::model::{RaceResult, RaceResultFields};

/// One result row: driver, laps, elapsed time (ms), best lap (ms).
pub type Row<'a> = (&'a str, u32, u64, u64);

/// Build a valid result for `driver`.
///
/// Position is 1 and the event id 0; [`Event::add_race_result`](crate::Event::add_race_result)
/// rewrites the event id on insertion.
pub fn result(driver: &str, laps: u32, time: u64, best_lap_time: u64) -> RaceResult {
    let fields = RaceResultFields {
        position: 1,
        driver: driver.to_string(),
        laps: i64::from(laps),
        time: time as i64,
        car: String::new(),
        best_lap_time: best_lap_time as i64,
        event_id: 0,
    };

    match RaceResult::new(fields) {
        Ok(result) => result,
        Err(e) => panic!("invalid test result for {driver:?}: {e}"),
    }
}

/// Build a championship with one committed event per slice of rows.
///
/// Positions are assigned in row order.
pub fn championship_with(events: &[&[Row<'_>]]) -> Championship {
    let mut championship = Championship::new("Test Cup", test_date());

    for rows in events {
        let mut event = championship.create_event();
        for (i, &(driver, laps, time, lap)) in rows.iter().enumerate() {
            let mut r = result(driver, laps, time, lap);
            if let Err(e) = r.update(crate::FieldUpdate::Position(i as i64 + 1)) {
                panic!("invalid test position: {e}");
            }
            event.add_race_result(r);
        }
        if let Err(e) = championship.add_result(event) {
            panic!("failed to commit test event: {e}");
        }
    }

    championship
}

/// Fixed date used by test championships
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 14).unwrap_or_default()
}

/// Format one result line of a cockpitXP timing export.
///
/// Columns: driver (25), car (55), laps (6), time (10), position (3), best lap.
pub fn export_line(driver: &str, car: &str, laps: i64, time: i64, position: i64, best_lap: i64) -> String {
    format!("{driver:<25}{car:<55}{laps:>6}{time:>10}{position:>3}{best_lap:>8}")
}

/// Section separator line of a cockpitXP timing export
pub const SEPARATOR: &str = "-------------------------------------------------------------------";

/// Build a complete export, one section per slice of rows.
pub fn export_text(events: &[&[Row<'_>]]) -> String {
    let mut lines = vec!["cockpitXP results export".to_string()];

    for rows in events {
        lines.push(SEPARATOR.to_string());
        for (i, &(driver, laps, time, lap)) in rows.iter().enumerate() {
            lines.push(export_line(driver, "Carrera GT", i64::from(laps), time as i64, i as i64 + 1, lap as i64));
        }
    }

    lines.join("\n") + "\n"
}

/// Championship with `drivers` drivers and `events` events, for benchmarks.
pub fn large_championship(drivers: usize, events: usize) -> Championship {
    let names: Vec<String> = (0..drivers).map(|d| format!("Driver {d:03}")).collect();
    let mut championship = Championship::new("Benchmark Cup", test_date());

    for e in 0..events {
        let mut event = championship.create_event();
        for (d, name) in names.iter().enumerate() {
            let laps = 40 + ((d * 7 + e * 3) % 11) as u32;
            let time = 3_000_000 + ((d * 7919 + e * 104_729) % 600_000) as u64;
            let lap = 65_000 + ((d * 31 + e * 17) % 5_000) as u64;
            event.add_race_result(result(name, laps, time, lap));
        }
        if let Err(e) = championship.add_result(event) {
            panic!("failed to commit benchmark event: {e}");
        }
    }

    championship
}
