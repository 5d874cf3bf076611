//! Standings with gaps to the leader and to the entry ahead

use std::sync::Arc;

use super::gap::Gap;
use super::order;
use crate::Championship;
use crate::model::{Driver, RaceResult};

/// How gaps between entries are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapBasis {
    /// Lap count first; time difference only when laps are equal
    Laps,
    /// Always a time difference (lap-time rankings)
    LapTime,
}

/// The quantities a gap is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub laps: u64,
    /// Elapsed time, or the lap time for [`GapBasis::LapTime`]
    pub time: u64,
}

/// One ranked entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing<T> {
    /// 1-based rank
    pub position: usize,
    pub entry: T,
    /// Gap to the leader, `None` for the leader
    pub gap: Option<Gap>,
    /// Gap to the entry directly ahead, `None` for the leader
    pub interval: Option<Gap>,
}

/// Attach positions and gaps to an already sorted list.
pub fn rank<T>(sorted: Vec<T>, basis: GapBasis, mark: impl Fn(&T) -> Mark) -> Vec<Standing<T>> {
    let marks: Vec<_> = sorted
        .iter()
        .map(|entry| {
            let m = mark(entry);
            let laps = match basis {
                GapBasis::Laps => Some(m.laps),
                GapBasis::LapTime => None,
            };
            (laps, m.time)
        })
        .collect();

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let (gap, interval) = if i == 0 {
                (None, None)
            } else {
                (Some(Gap::between(marks[0], marks[i])), Some(Gap::between(marks[i - 1], marks[i])))
            };
            Standing { position: i + 1, entry, gap, interval }
        })
        .collect()
}

fn result_mark(result: &RaceResult) -> Mark {
    Mark { laps: u64::from(result.laps()), time: result.time() }
}

impl Championship {
    /// Drivers by total laps then total time, over every event.
    pub fn cumulative_standings(&self) -> Vec<Standing<&Driver>> {
        let drivers = self
            .driver_results_by(order::cumulative)
            .into_iter()
            .filter(|d| d.number_of_events() > 0)
            .collect();

        rank(drivers, GapBasis::Laps, |d| Mark { laps: d.total_laps(), time: d.total_time() })
    }

    /// Drivers by their best single result.
    pub fn best_result_standings(&self) -> Vec<Standing<(&Driver, &Arc<RaceResult>)>> {
        let drivers = self
            .driver_results()
            .into_iter()
            .filter_map(|d| d.best_result().map(|best| (d, best)))
            .collect();

        rank(drivers, GapBasis::Laps, |(_, best)| result_mark(best))
    }

    /// Drivers by fastest lap, with the result that set it.
    pub fn fastest_lap_standings(&self) -> Vec<Standing<(&Driver, &Arc<RaceResult>)>> {
        let drivers = self
            .driver_results_by(order::fastest_lap)
            .into_iter()
            .filter_map(|d| d.fastest_lap_result().map(|fastest| (d, fastest)))
            .collect();

        rank(drivers, GapBasis::LapTime, |(_, fastest)| Mark {
            laps: u64::from(fastest.laps()),
            time: fastest.best_lap_time(),
        })
    }

    /// Results of the most recent event.
    pub fn last_event_standings(&self) -> Vec<Standing<&Arc<RaceResult>>> {
        rank(self.last_event_results(), GapBasis::Laps, |r| result_mark(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::championship_with;

    fn texts<T>(standings: &[Standing<T>]) -> Vec<(Option<String>, Option<String>)> {
        standings
            .iter()
            .map(|s| (s.gap.map(|g| g.to_string()), s.interval.map(|g| g.to_string())))
            .collect()
    }

    #[test]
    fn leader_has_no_gap() {
        let ranked = rank(vec![10u64, 8, 8], GapBasis::Laps, |&laps| Mark { laps, time: 0 });

        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[0].gap, None);
        assert_eq!(ranked[0].interval, None);
        assert_eq!(ranked[2].position, 3);
    }

    #[test]
    fn gap_to_leader_and_to_entry_ahead() {
        let entries = vec![(10, 600_000), (10, 605_250), (9, 601_000), (7, 500_000)];
        let ranked = rank(entries, GapBasis::Laps, |&(laps, time)| Mark { laps, time });

        assert_eq!(
            texts(&ranked),
            [
                (None, None),
                (Some("0:05.250".to_string()), Some("0:05.250".to_string())),
                (Some("1 Lap".to_string()), Some("1 Lap".to_string())),
                (Some("3 Laps".to_string()), Some("2 Laps".to_string())),
            ]
        );
    }

    #[test]
    fn lap_time_basis_never_reports_laps() {
        let entries = vec![(50, 69_000), (12, 69_400), (3, 71_000)];
        let ranked = rank(entries, GapBasis::LapTime, |&(laps, time)| Mark { laps, time });

        assert_eq!(
            texts(&ranked),
            [
                (None, None),
                (Some("0:00.400".to_string()), Some("0:00.400".to_string())),
                (Some("0:02.000".to_string()), Some("0:01.600".to_string())),
            ]
        );
    }

    #[test]
    fn championship_views() {
        let mut championship = championship_with(&[
            &[("A", 50, 3_600_000, 71_000), ("B", 50, 3_650_000, 70_500)],
            &[("A", 48, 3_500_000, 70_900), ("B", 50, 3_400_000, 72_000)],
        ]);
        championship.get_or_create_driver("Spectator").unwrap();

        let cumulative = championship.cumulative_standings();
        assert_eq!(cumulative.iter().map(|s| s.entry.name()).collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(cumulative[1].gap.unwrap().to_string(), "2 Laps");

        let best = championship.best_result_standings();
        assert_eq!(best.iter().map(|s| s.entry.0.name()).collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(best[1].gap.unwrap().to_string(), "3:20.000");

        let fastest = championship.fastest_lap_standings();
        assert_eq!(fastest.iter().map(|s| s.entry.0.name()).collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(fastest[0].entry.1.best_lap_time(), 70_500);
        assert_eq!(fastest[1].gap.unwrap().to_string(), "0:00.400");

        let last = championship.last_event_standings();
        assert_eq!(last.iter().map(|s| s.entry.driver()).collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(last[1].interval.unwrap().to_string(), "2 Laps");
    }
}
