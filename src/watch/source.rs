//! Sources of timing export text

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

use crate::{PodiumError, Result};

/// Trait for timing export sources
///
/// A source reports whether its contents changed since the last check and
/// hands out the current text. The watch loop calls `changed` once per poll
/// and `read` only after a change was reported.
#[async_trait::async_trait]
pub trait ResultSource: Send + 'static {
    /// Check for a change since the previous call.
    ///
    /// The first call reports a change whenever data is available.
    async fn changed(&mut self) -> Result<bool>;

    /// Read the full current export text.
    async fn read(&mut self) -> Result<String>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

/// Export file on disk, polled by modification time.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    missing: bool,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf(), last_modified: None, missing: false }
    }

    /// Source for an export file that must already exist.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tokio::fs::metadata(path).await.map_err(|e| PodiumError::file_error(path.to_path_buf(), e))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ResultSource for FileSource {
    async fn changed(&mut self) -> Result<bool> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if !self.missing {
                    warn!(path = %self.path.display(), "Export file missing");
                    self.missing = true;
                }
                return Ok(false);
            }
            Err(e) => return Err(PodiumError::file_error(self.path.clone(), e)),
        };

        self.missing = false;
        let modified = metadata.modified().map_err(|e| PodiumError::file_error(self.path.clone(), e))?;
        if self.last_modified == Some(modified) {
            return Ok(false);
        }

        self.last_modified = Some(modified);
        Ok(true)
    }

    async fn read(&mut self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| PodiumError::file_error(self.path.clone(), e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
