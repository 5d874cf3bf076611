//! End-to-end tests: export file -> championship -> rendered pages

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use podium::render::{MemorySink, render_all};
use podium::{
    CockpitXpParser, DirectorySink, OutputFormat, PageKind, PodiumError, Standing, format_lap_time,
};

const SEPARATOR: &str = "------------------------------------------------------------";

fn line(driver: &str, car: &str, laps: i64, time: i64, position: i64, best_lap: i64) -> String {
    format!("{driver:<25}{car:<55}{laps:>6}{time:>10}{position:>3}{best_lap:>8}")
}

/// Two Grands Prix between drivers A and B, plus noise the parser must skip.
fn season_export() -> String {
    [
        "cockpitXP  Rennergebnisse".to_string(),
        SEPARATOR.to_string(),
        line("A", "Porsche 911", 50, 3_600_000, 1, 71_000),
        line("B", "Ferrari 296", 50, 3_650_000, 2, 70_500),
        line("   ", "Ghost car", 50, 3_650_000, 3, 70_500),
        SEPARATOR.to_string(),
        line("B", "Ferrari 296", 50, 3_400_000, 1, 72_000),
        line("A", "Porsche 911", 48, 3_500_000, 2, 70_900),
        line("Broken", "Porsche 911", 48, 3_500_000, 3, 0).replace("       0", "   n/a  "),
    ]
    .join("\n")
}

fn write_export(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("results.txt");
    fs::write(&path, season_export()).unwrap();
    path
}

fn parser() -> CockpitXpParser {
    CockpitXpParser::new("Ferraro", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
}

fn names<T>(standings: &[Standing<T>], name: impl Fn(&T) -> &str) -> Vec<String> {
    standings.iter().map(|s| name(&s.entry).to_string()).collect()
}

#[test]
fn two_event_season_rankings() {
    let dir = tempfile::tempdir().unwrap();
    let championship = parser().parse_file(write_export(dir.path())).unwrap();

    assert_eq!(championship.events().len(), 2);
    assert_eq!(championship.event_index(), 3);
    assert_eq!(championship.drivers().len(), 2);

    let a = championship.find_driver("A").unwrap().unwrap();
    assert_eq!((a.total_laps(), a.total_time()), (98, 7_100_000));
    let b = championship.find_driver("B").unwrap().unwrap();
    assert_eq!((b.total_laps(), b.total_time()), (100, 7_050_000));

    let cumulative = championship.cumulative_standings();
    assert_eq!(names(&cumulative, |d| d.name()), ["B", "A"]);
    assert_eq!(cumulative[1].gap.unwrap().to_string(), "2 Laps");

    let best = championship.best_result_standings();
    assert_eq!(names(&best, |(d, _)| d.name()), ["B", "A"]);
    assert_eq!(best[0].entry.1.time(), 3_400_000);
    assert_eq!(best[1].entry.1.time(), 3_600_000);

    let fastest = championship.fastest_lap_standings();
    assert_eq!(names(&fastest, |(d, _)| d.name()), ["B", "A"]);
    assert_eq!(format_lap_time(fastest[0].entry.1.best_lap_time()), "1:10.500");

    let last = championship.last_event_standings();
    assert_eq!(names(&last, |r| r.driver()), ["B", "A"]);
    assert_eq!(last[1].gap.unwrap().to_string(), "2 Laps");
}

#[test]
fn event_lookup_is_one_based() {
    let championship = parser().parse_str(&season_export()).unwrap();

    assert_eq!(championship.event(1).unwrap().name(), "Grand Prix 1");
    assert_eq!(championship.event(2).unwrap().results().len(), 2);
    assert!(matches!(championship.event(0), Err(PodiumError::EventOutOfRange { .. })));
    assert!(matches!(championship.event(3), Err(PodiumError::EventOutOfRange { .. })));
}

#[test]
fn renders_all_pages_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let championship = parser().parse_file(write_export(dir.path())).unwrap();

    let out = dir.path().join("output");
    let mut sink = DirectorySink::new(&out, OutputFormat::Html).unwrap();
    render_all(&championship, &mut sink).unwrap();

    for kind in PageKind::ALL {
        let html = fs::read_to_string(sink.path_for(kind)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"), "{kind:?} is not an HTML page");
        assert!(html.contains("<h1>Ferraro</h1>"));
    }

    let championship_page = fs::read_to_string(out.join("championship.html")).unwrap();
    assert!(championship_page.contains("<td>2 Laps</td>"));
}

#[test]
fn rendered_rows_carry_display_fields() {
    let championship = parser().parse_str(&season_export()).unwrap();
    let mut sink = MemorySink::default();
    render_all(&championship, &mut sink).unwrap();

    let sprint = sink.pages.iter().find(|p| p.kind == PageKind::SprintRanking).unwrap();
    let leader = &sprint.rows[0];
    assert_eq!(leader.name, "B");
    assert_eq!(leader.car.as_deref(), Some("Ferrari 296"));
    assert_eq!(leader.time.as_deref(), Some("56:40.000"));
    assert_eq!(leader.best_event, Some(2));
    assert_eq!(sprint.rows[1].person_in_front, "3:20.000");
}

#[test]
fn empty_export_renders_empty_pages() {
    let championship = parser().parse_str("cockpitXP  Rennergebnisse\n").unwrap();
    let mut sink = MemorySink::default();
    render_all(&championship, &mut sink).unwrap();

    assert_eq!(sink.pages.len(), 4);
    assert!(sink.pages.iter().all(|p| p.rows.is_empty()));
}
