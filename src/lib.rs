//! Championship standings from racing-simulation timing exports.
//!
//! Podium reads the fixed-width results export of a race timing tool,
//! aggregates every driver's results across the championship's events and
//! renders ranking pages.
//!
//! # Features
//!
//! - **Aggregation**: Drivers, events and results kept consistent on every commit
//! - **Rankings**: Cumulative, best-result, fastest-lap and last-event standings
//! - **Gaps**: Gap to the leader and to the car ahead, in laps or time
//! - **Watching**: Rebuild and re-render whenever the export changes
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use podium::CockpitXpParser;
//!
//! let parser = CockpitXpParser::new("Winter Cup", NaiveDate::default());
//! let championship = parser.parse_str("")?;
//!
//! for standing in championship.cumulative_standings() {
//!     println!("{} {}", standing.position, standing.entry.name());
//! }
//! # Ok::<(), podium::PodiumError>(())
//! ```

// Core model and error handling
mod championship;
mod error;
pub mod model;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
mod text_utils;

// Queries and collaborators
pub mod config;
pub mod ingest;
pub mod ranking;
pub mod render;
pub mod watch;

// Core exports
pub use championship::Championship;
pub use error::*;
pub use model::{Driver, Event, FieldUpdate, RaceResult, RaceResultFields};

// Collaborator exports
pub use config::Config;
pub use ingest::CockpitXpParser;
pub use ranking::{Gap, Standing, format_lap_time};
pub use render::{DirectorySink, OutputFormat, Page, PageKind, PageSink};
pub use watch::{FileSource, ResultSource, WatchChannels, Watcher};
