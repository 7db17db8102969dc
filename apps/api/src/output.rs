//! Output sink — persists tailored resumes as UTF-8 text.
//!
//! `AppState` holds an `Arc<dyn OutputSink>`; the default backend writes into
//! the configured output directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;

/// Destination for tailored resume text. Implement this to swap storage
/// backends without touching handlers or the CLI.
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Stores `content` under `file_name` and returns where it landed.
    async fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError>;
}

/// Writes into a directory on the local filesystem, creating it on first use.
#[derive(Debug, Clone)]
pub struct FsOutputSink {
    dir: PathBuf,
}

impl FsOutputSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl OutputSink for FsOutputSink {
    async fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(AppError::Validation(format!(
                "Invalid output file name '{file_name}'"
            )));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, content.trim()).await?;

        info!(path = %path.display(), bytes = content.trim().len(), "Saved tailored resume");
        Ok(path)
    }
}
