//! cockpitXP fixed-width results export
//!
//! The export is a plain text file. Sections are introduced by a separator
//! line starting with `----`; every section is one event. Result lines use
//! fixed character columns:
//!
//! ```text
//! [0, 25)   driver name
//! [25, 80)  car
//! [80, 86)  laps
//! [86, 96)  elapsed time (ms)
//! [96, 99)  position
//! [99, ..)  best lap time (ms)
//! ```
//!
//! Lines that are too short, lack a driver name or carry non-numeric values
//! are skipped. A bad line never aborts the whole parse.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, trace, warn};

use crate::model::{Event, RaceResult, RaceResultFields};
use crate::text_utils::{column, normalize_name, normalize_whitespace, parse_numeric};
use crate::{Championship, PodiumError, Result};

/// Prefix of a section separator line
pub const SEPARATOR_PREFIX: &str = "----";

/// Shortest line that can hold a result
pub const MIN_LINE_LEN: usize = 99;

/// How one line of the export was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Start of a new event
    Separator,
    /// Header, blank or too-short line
    Ignored,
    /// Decoded result fields (event id not yet assigned)
    Result(RaceResultFields),
}

/// Classify and decode one line.
///
/// Returns an error for lines that look like results but cannot be decoded.
pub fn decode_line(line: &str) -> Result<Line> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.starts_with(SEPARATOR_PREFIX) {
        return Ok(Line::Separator);
    }
    if line.chars().count() < MIN_LINE_LEN {
        return Ok(Line::Ignored);
    }

    let driver = normalize_name(&column(line, 0, Some(25)));
    if driver.is_empty() {
        return Ok(Line::Ignored);
    }

    Ok(Line::Result(RaceResultFields {
        driver,
        car: normalize_whitespace(&column(line, 25, Some(80))),
        laps: parse_numeric(&column(line, 80, Some(86)), "laps")?,
        time: parse_numeric(&column(line, 86, Some(96)), "time")?,
        position: parse_numeric(&column(line, 96, Some(99)), "position")?,
        best_lap_time: parse_numeric(&column(line, 99, None), "best_lap_time")?,
        event_id: 0,
    }))
}

/// Builds a [`Championship`] from cockpitXP export text.
#[derive(Debug, Clone)]
pub struct CockpitXpParser {
    name: String,
    date: NaiveDate,
}

impl CockpitXpParser {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date }
    }

    /// Read and parse an export file.
    ///
    /// The file is decoded as UTF-8; invalid bytes are replaced rather than
    /// rejected.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Championship> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).map_err(|e| PodiumError::file_error(path.to_path_buf(), e))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Read timing export");
        self.parse_str(&String::from_utf8_lossy(&bytes))
    }

    /// Parse export text.
    ///
    /// Result lines before the first separator open an implicit first event.
    /// Empty sections are committed as events without results.
    pub fn parse_str(&self, text: &str) -> Result<Championship> {
        let mut championship = Championship::new(self.name.clone(), self.date);
        let mut current: Option<Event> = None;
        let mut accepted = 0usize;
        let mut skipped = 0usize;

        for (number, line) in text.lines().enumerate() {
            let number = number + 1;

            let fields = match decode_line(line) {
                Ok(Line::Separator) => {
                    if let Some(event) = current.take() {
                        championship.add_result(event)?;
                    }
                    current = Some(championship.create_event());
                    continue;
                }
                Ok(Line::Ignored) => {
                    trace!(line = number, "Ignoring line");
                    continue;
                }
                Ok(Line::Result(fields)) => fields,
                Err(e) if e.is_skippable() => {
                    warn!(line = number, error = %e, "Skipping malformed result line");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let result = match RaceResult::new(fields) {
                Ok(result) => result,
                Err(e) if e.is_skippable() => {
                    warn!(line = number, error = %e, "Skipping invalid result line");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            current.get_or_insert_with(|| championship.create_event()).add_race_result(result);
            accepted += 1;
        }

        if let Some(event) = current.take() {
            championship.add_result(event)?;
        }

        info!(
            events = championship.events().len(),
            drivers = championship.drivers().len(),
            results = accepted,
            skipped,
            "Parsed timing export"
        );

        Ok(championship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SEPARATOR, export_line, export_text, test_date};

    fn parser() -> CockpitXpParser {
        CockpitXpParser::new("Ferraro", test_date())
    }

    #[test]
    fn decode_line_reads_every_column() {
        let line = export_line("  Ada   Lovelace", "Ferrari   F2004", 50, 3_600_000, 2, 71_000);

        let Line::Result(fields) = decode_line(&line).unwrap() else {
            panic!("expected a result line");
        };
        assert_eq!(fields.driver, "Ada Lovelace");
        assert_eq!(fields.car, "Ferrari F2004");
        assert_eq!(fields.laps, 50);
        assert_eq!(fields.time, 3_600_000);
        assert_eq!(fields.position, 2);
        assert_eq!(fields.best_lap_time, 71_000);
    }

    #[test]
    fn parsed_names_are_found_by_their_raw_export_text() {
        for raw in ["Max\tPower", "Jürgen 🏁 Müller"] {
            let text = export_text(&[]) + &export_line(raw, "Ferrari", 50, 3_600_000, 1, 71_000);
            let championship = parser().parse_str(&text).unwrap();

            let driver = championship.find_driver(raw).unwrap();
            assert!(driver.is_some(), "{raw:?} not found after parsing");
            assert_eq!(championship.drivers().len(), 1);
        }

        let championship = parser()
            .parse_str(&export_line("Max\tPower", "Ferrari", 50, 3_600_000, 1, 71_000))
            .unwrap();
        assert_eq!(championship.drivers()[0].name(), "Max Power");
    }

    #[test]
    fn decode_line_classifies_non_results() {
        assert_eq!(decode_line("---- Race 2 ----").unwrap(), Line::Separator);
        assert_eq!(decode_line("short header").unwrap(), Line::Ignored);

        let blank_name = export_line("", "Ferrari", 50, 3_600_000, 2, 71_000);
        assert_eq!(decode_line(&blank_name).unwrap(), Line::Ignored);
    }

    #[test]
    fn decode_line_rejects_non_numeric_columns() {
        let mut line = export_line("Ada", "Ferrari", 50, 3_600_000, 2, 71_000);
        line.replace_range(82..84, "xx");

        let err = decode_line(&line).unwrap_err();
        assert!(err.is_skippable());
    }

    #[test]
    fn decode_line_requires_best_lap_column() {
        let line = format!("{}\r\n", &export_line("Ada", "Ferrari", 50, 3_600_000, 2, 71_000)[..99]);
        assert!(decode_line(&line).is_err());
    }

    #[test]
    fn parse_groups_sections_into_events() {
        let text = export_text(&[
            &[("A", 50, 3_600_000, 71_000), ("B", 50, 3_650_000, 70_500)],
            &[("A", 48, 3_500_000, 70_900), ("B", 50, 3_400_000, 72_000)],
        ]);

        let championship = parser().parse_str(&text).unwrap();

        assert_eq!(championship.name(), "Ferraro");
        assert_eq!(championship.events().len(), 2);
        assert_eq!(championship.drivers().len(), 2);
        let second = championship.event(2).unwrap();
        assert!(second.results().iter().all(|r| r.event_id() == 2));
        assert_eq!(second.results()[1].driver(), "B");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let mut text = String::new();
        text.push_str(SEPARATOR);
        text.push('\n');
        text.push_str(&export_line("Ada", "Ferrari", 50, 3_600_000, 1, 71_000));
        text.push('\n');
        text.push_str(&export_line("Negative", "Ferrari", -4, 3_600_000, 2, 71_000));
        text.push('\n');
        text.push_str(&export_line("Nobody", "Ferrari", 50, 3_600_000, 0, 71_000));
        text.push('\n');
        text.push_str("Too short to be a result\n");

        let championship = parser().parse_str(&text).unwrap();

        assert_eq!(championship.drivers().len(), 1);
        assert_eq!(championship.events()[0].results().len(), 1);
    }

    #[test]
    fn results_before_first_separator_open_an_event() {
        let text = export_line("Ada", "Ferrari", 50, 3_600_000, 1, 71_000);
        let championship = parser().parse_str(&text).unwrap();

        assert_eq!(championship.events().len(), 1);
        assert_eq!(championship.event(1).unwrap().results().len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_championship() {
        let championship = parser().parse_str("").unwrap();

        assert!(championship.events().is_empty());
        assert!(championship.drivers().is_empty());
        assert!(championship.last_event_results().is_empty());
    }

    #[test]
    fn empty_sections_are_committed() {
        let text = format!("{SEPARATOR}\n{SEPARATOR}\n");
        let championship = parser().parse_str(&text).unwrap();

        assert_eq!(championship.events().len(), 2);
        assert_eq!(championship.event_index(), 3);
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let err = parser().parse_file("/nonexistent/results.txt").unwrap_err();
        assert!(matches!(err, PodiumError::File { .. }));
    }
}
