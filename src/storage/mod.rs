//! Storage abstractions for report persistence.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::Report;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of report rows written
    pub row_count: usize,
    /// Where the report was written
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Local>,
}

/// Trait for report storage backends.
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Persist the full report, replacing any previous one.
    async fn write_report(&self, report: &Report) -> Result<WriteMetadata>;
}
