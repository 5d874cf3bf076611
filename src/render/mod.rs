//! Rendering of standings pages
//!
//! A [`Page`] is one standings view flattened into [`Row`]s. Pages are handed
//! to a [`PageSink`], which decides where and in which format they end up.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Championship, PodiumError, Result};

pub mod html;
mod rows;

pub use rows::{Row, best_result_rows, championship_rows, fastest_lap_rows, last_event_rows};

/// The four standings pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Cumulative standings over all events
    Championship,
    /// Best single result per driver
    SprintRanking,
    /// Fastest lap per driver
    FastestLap,
    /// Most recent event
    GrandPrix,
}

/// One table column of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Position,
    Name,
    Laps,
    Time,
    Car,
    Gap,
    PersonInFront,
    LapTime,
    BestPlacement,
    Events,
    BestEvent,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Position => "Pos",
            Column::Name => "Driver",
            Column::Laps => "Laps",
            Column::Time => "Time",
            Column::Car => "Car",
            Column::Gap => "Gap",
            Column::PersonInFront => "Interval",
            Column::LapTime => "Fastest Lap",
            Column::BestPlacement => "Place",
            Column::Events => "Races",
            Column::BestEvent => "Grand Prix",
        }
    }

    pub fn cell(self, row: &Row) -> String {
        fn opt<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        match self {
            Column::Position => row.position.to_string(),
            Column::Name => row.name.clone(),
            Column::Laps => opt(&row.laps),
            Column::Time => opt(&row.time),
            Column::Car => opt(&row.car),
            Column::Gap => row.gap.clone(),
            Column::PersonInFront => row.person_in_front.clone(),
            Column::LapTime => opt(&row.lap_time),
            Column::BestPlacement => opt(&row.best_placement),
            Column::Events => opt(&row.events),
            Column::BestEvent => opt(&row.best_event),
        }
    }
}

impl PageKind {
    pub const ALL: [PageKind; 4] =
        [PageKind::Championship, PageKind::SprintRanking, PageKind::FastestLap, PageKind::GrandPrix];

    /// File stem of the rendered page
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Championship => "championship",
            PageKind::SprintRanking => "sprint_ranking",
            PageKind::FastestLap => "fastest_lap",
            PageKind::GrandPrix => "grand_prix",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            PageKind::Championship => &[Position, Name, Laps, Time, Gap, PersonInFront, LapTime, Events],
            PageKind::SprintRanking => &[
                Position,
                Name,
                Laps,
                Time,
                Car,
                Gap,
                PersonInFront,
                LapTime,
                BestPlacement,
                Events,
                BestEvent,
            ],
            PageKind::FastestLap => &[Position, Name, LapTime, Car, Gap, PersonInFront, BestEvent],
            PageKind::GrandPrix => &[Position, Name, Laps, Time, Car, Gap, PersonInFront, LapTime, BestPlacement],
        }
    }
}

/// A standings view ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    pub championship: String,
    pub rows: Vec<Row>,
}

impl Page {
    /// Build one page from the championship.
    pub fn build(kind: PageKind, championship: &Championship) -> Self {
        let rows = match kind {
            PageKind::Championship => championship_rows(championship),
            PageKind::SprintRanking => best_result_rows(championship),
            PageKind::FastestLap => fastest_lap_rows(championship),
            PageKind::GrandPrix => last_event_rows(championship),
        };
        Self { kind, championship: championship.name().to_string(), rows }
    }

    /// Build all four pages.
    pub fn build_all(championship: &Championship) -> Vec<Self> {
        PageKind::ALL.iter().map(|&kind| Self::build(kind, championship)).collect()
    }

    /// Heading shown above the table
    pub fn title(&self) -> &'static str {
        match self.kind {
            PageKind::Championship => "Championship Standings",
            PageKind::SprintRanking => "Best Race Results",
            PageKind::FastestLap => "Fastest Laps",
            PageKind::GrandPrix => "Latest Grand Prix",
        }
    }
}

/// Output format for written pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Destination for rendered pages.
pub trait PageSink {
    fn write_page(&mut self, page: &Page) -> Result<()>;
}

/// Render every page of `championship` into `sink`.
pub fn render_all<S: PageSink + ?Sized>(championship: &Championship, sink: &mut S) -> Result<()> {
    for page in Page::build_all(championship) {
        sink.write_page(&page)?;
    }
    info!(championship = championship.name(), "Rendered standings pages");
    Ok(())
}

/// Writes each page to `<dir>/<slug>.<ext>`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    format: OutputFormat,
}

impl DirectorySink {
    /// Create the sink, creating `dir` if needed.
    pub fn new<P: AsRef<Path>>(dir: P, format: OutputFormat) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| PodiumError::output_error(dir.clone(), e))?;
        Ok(Self { dir, format })
    }

    pub fn path_for(&self, kind: PageKind) -> PathBuf {
        self.dir.join(format!("{}.{}", kind.slug(), self.format.extension()))
    }
}

impl PageSink for DirectorySink {
    fn write_page(&mut self, page: &Page) -> Result<()> {
        let contents = match self.format {
            OutputFormat::Html => html::render(page),
            OutputFormat::Json => serde_json::to_string_pretty(page).map_err(|e| PodiumError::Serialize {
                context: page.kind.slug().to_string(),
                details: e.to_string(),
            })?,
        };

        let path = self.path_for(page.kind);
        fs::write(&path, contents).map_err(|e| PodiumError::output_error(path.clone(), e))?;
        debug!(path = %path.display(), rows = page.rows.len(), "Wrote page");
        Ok(())
    }
}

/// Keeps rendered pages in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub pages: Vec<Page>,
}

impl PageSink for MemorySink {
    fn write_page(&mut self, page: &Page) -> Result<()> {
        self.pages.push(page.clone());
        Ok(())
    }
}
