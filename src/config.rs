//! Runtime configuration
//!
//! Configuration comes from an optional YAML file; command-line flags
//! override individual values afterwards.
//!
//! ```yaml
//! championship: Ferraro
//! input: results/season.txt
//! output_dir: output
//! poll_interval_ms: 2000
//! format: html
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::OutputFormat;
use crate::{PodiumError, Result};

/// Default interval between modification-time checks
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Championship name shown on every page
    pub championship: String,
    /// Timing export to read
    pub input: Option<PathBuf>,
    /// Directory rendered pages are written to
    pub output_dir: PathBuf,
    pub poll_interval_ms: u64,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            championship: "Championship".to_string(),
            input: None,
            output_dir: PathBuf::from("output"),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
            .map_err(|e| PodiumError::config_error(format!("YAML parsing failed: {}", e)))
    }

    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PodiumError::file_error(path.to_path_buf(), e))?;

        debug!(path = %path.display(), "Loaded configuration");
        Self::parse(&text)
    }

    /// Check that the configuration can drive an ingestion run.
    ///
    /// Returns the input path on success.
    pub fn validate(&self) -> Result<&Path> {
        if self.poll_interval_ms == 0 {
            return Err(PodiumError::config_error("poll_interval_ms must be greater than 0"));
        }
        if self.championship.trim().is_empty() {
            return Err(PodiumError::config_error("championship name must not be empty"));
        }
        self.input
            .as_deref()
            .ok_or_else(|| PodiumError::config_error("no input file given"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::parse("championship: Ferraro\nformat: json\n").unwrap();

        assert_eq!(config.championship, "Ferraro");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("champion: typo\n").unwrap_err();
        assert!(matches!(err, PodiumError::Config { .. }));
    }

    #[test]
    fn validate_requires_input_and_interval() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.input = Some(PathBuf::from("results.txt"));
        assert_eq!(config.validate().unwrap(), Path::new("results.txt"));

        config.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("podium.yaml");
        std::fs::write(&path, "input: season.txt\npoll_interval_ms: 250\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("season.txt")));
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }
}
