//! Ranking queries over a [`Championship`](crate::Championship)
//!
//! Four standings views share one gap algorithm:
//!
//! | View | Order | Gap |
//! |------|-------|-----|
//! | cumulative | total laps desc, total time asc | laps, else time |
//! | best result | best laps desc, best time asc | laps, else time |
//! | fastest lap | fastest lap asc | lap time only |
//! | last event | laps desc, time asc | laps, else time |
//!
//! The leader is the first entry. Every other entry carries a gap to the
//! leader and an interval to the entry directly ahead.

mod gap;
pub mod order;
mod standings;

pub use gap::{Gap, format_lap_time};
pub use standings::{GapBasis, Mark, Standing, rank};
