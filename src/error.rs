//! Error types for championship processing.
//!
//! All errors implement the `std::error::Error` trait and carry enough
//! structured context to tell the caller which value or lookup was rejected.
//!
//! ## Error Categories
//!
//! - **Field Errors**: A race result value outside its allowed range
//! - **Lookup Errors**: Malformed driver names or out-of-range event indices
//! - **Derived Statistic Errors**: Statistics requested from a driver with no results
//! - **Input/Output Errors**: Reading the timing export or writing rendered pages
//! - **Parse/Config Errors**: Malformed lines or configuration files
//!
//! ## Skipping vs. aborting
//!
//! The ingestion adapter uses [`PodiumError::is_skippable`] to decide whether a
//! failure only concerns one input line:
//!
//! ```rust
//! use podium::PodiumError;
//!
//! let error = PodiumError::invalid_field("laps", "cannot be negative");
//! assert!(error.is_skippable());
//!
//! let error = PodiumError::event_out_of_range(4, 3);
//! assert!(!error.is_skippable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for championship operations.
pub type Result<T, E = PodiumError> = std::result::Result<T, E>;

/// Main error type for championship operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PodiumError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid driver name: {name:?}")]
    InvalidName { name: String },

    #[error("Event index {index} out of range (championship has {len} events)")]
    EventOutOfRange { index: usize, len: usize },

    #[error("Event id {found} is out of sequence, expected {expected}")]
    EventOutOfSequence { expected: u32, found: u32 },

    #[error("Driver '{driver}' has no race results")]
    NoResults { driver: String },

    #[error("Timing file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Failed to write output: {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {context}: {details}")]
    Serialize { context: String, details: String },
}

impl PodiumError {
    /// Returns whether this error only concerns a single input record.
    ///
    /// Ingestion skips records that fail with a skippable error and keeps going.
    pub fn is_skippable(&self) -> bool {
        match self {
            PodiumError::InvalidField { .. } => true,
            PodiumError::InvalidName { .. } => true,
            PodiumError::Parse { .. } => true,
            PodiumError::EventOutOfRange { .. } => false,
            PodiumError::EventOutOfSequence { .. } => false,
            PodiumError::NoResults { .. } => false,
            PodiumError::File { .. } => false,
            PodiumError::Config { .. } => false,
            PodiumError::Output { .. } => false,
            PodiumError::Serialize { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            PodiumError::InvalidField { .. } => vec![
                "Check the column layout of the timing export",
                "Verify numeric columns contain non-negative integers",
            ],
            PodiumError::InvalidName { .. } => vec![
                "Ensure every result line carries a driver name",
                "Check the driver column width of the export",
            ],
            PodiumError::EventOutOfRange { .. } => vec![
                "Use 1-based event indices",
                "Check the number of events with event_index()",
            ],
            PodiumError::EventOutOfSequence { .. } => vec![
                "Create events with Championship::create_event",
                "Commit events in the order they were created",
            ],
            PodiumError::NoResults { .. } => vec![
                "Check best_result() before using derived statistics",
                "Exclude drivers without results from rankings",
            ],
            PodiumError::File { .. } => vec![
                "Check file exists and is readable",
                "Verify the path passed on the command line",
            ],
            PodiumError::Parse { .. } => vec![
                "Check data format compatibility",
                "Verify source data integrity",
            ],
            PodiumError::Config { .. } => vec![
                "Check the configuration file syntax",
                "Pass the input file on the command line",
            ],
            PodiumError::Output { .. } | PodiumError::Serialize { .. } => vec![
                "Check the output directory exists and is writable",
                "Ensure sufficient disk space",
            ],
        }
    }

    /// Helper constructor for rejected field values.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        PodiumError::InvalidField { field, reason: reason.into() }
    }

    /// Helper constructor for rejected driver names.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        PodiumError::InvalidName { name: name.into() }
    }

    /// Helper constructor for event lookups outside `[1, len]`.
    pub fn event_out_of_range(index: usize, len: usize) -> Self {
        PodiumError::EventOutOfRange { index, len }
    }

    /// Helper constructor for drivers without results.
    pub fn no_results(driver: impl Into<String>) -> Self {
        PodiumError::NoResults { driver: driver.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        PodiumError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        PodiumError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(reason: impl Into<String>) -> Self {
        PodiumError::Config { reason: reason.into() }
    }

    /// Helper constructor for output errors with path context.
    pub fn output_error(path: PathBuf, source: std::io::Error) -> Self {
        PodiumError::Output { path, source }
    }
}
