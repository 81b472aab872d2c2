//! Local filesystem storage implementation.
//!
//! Writes the report as a single CSV or JSON file. Writes go to a temporary
//! sibling file that is renamed into place, so a failed run never leaves a
//! truncated report behind.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{Report, ReportFormat};
use crate::storage::{ReportStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    format: ReportFormat,
}

impl LocalStorage {
    /// Create a LocalStorage writing to `path` in the given format.
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ReportStorage for LocalStorage {
    async fn write_report(&self, report: &Report) -> Result<WriteMetadata> {
        let bytes = match self.format {
            ReportFormat::Csv => report.to_csv()?,
            ReportFormat::Json => report.to_json()?,
        };
        self.write_bytes(&bytes).await?;

        log::debug!(
            "Wrote {} bytes of {} to {}",
            bytes.len(),
            self.format.extension(),
            self.path.display()
        );

        Ok(WriteMetadata {
            row_count: report.len(),
            location: self.path.display().to_string(),
            timestamp: Local::now(),
        })
    }
}
