//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ListingSelectors;
use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Index page URL without the page parameter
    #[serde(default)]
    pub base_url: String,

    /// Number of index pages to crawl
    #[serde(default = "defaults::num_pages")]
    pub num_pages: u32,

    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Status and actively-hiring thresholds
    #[serde(default)]
    pub freshness: FreshnessPolicy,

    /// Index and detail page selectors
    #[serde(default)]
    pub selectors: ListingSelectors,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::validation("base_url is empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| AppError::validation(format!("base_url is not a URL: {e}")))?;
        if self.num_pages == 0 {
            return Err(AppError::validation("num_pages must be > 0"));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.freshness.hot_days == 0 {
            return Err(AppError::validation("freshness.hot_days must be > 0"));
        }
        if self.freshness.actively_hiring_days == 0 {
            return Err(AppError::validation(
                "freshness.actively_hiring_days must be > 0",
            ));
        }
        self.selectors.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            num_pages: defaults::num_pages(),
            crawler: CrawlerConfig::default(),
            freshness: FreshnessPolicy::default(),
            selectors: ListingSelectors::default(),
            output: OutputConfig::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Day thresholds used to classify how fresh a listing is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// Listings younger than this many days are "Hot"
    #[serde(default = "defaults::hot_days")]
    pub hot_days: i64,

    /// Listings younger than this many days are actively hiring
    #[serde(default = "defaults::actively_hiring_days")]
    pub actively_hiring_days: i64,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            hot_days: defaults::hot_days(),
            actively_hiring_days: defaults::actively_hiring_days(),
        }
    }
}

/// Serialization format of a persisted report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File to persist the report to; the report is only printed when unset
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub format: ReportFormat,

    /// Print the report table to stdout
    #[serde(default = "defaults::console")]
    pub console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: ReportFormat::default(),
            console: defaults::console(),
        }
    }
}

mod defaults {
    pub fn num_pages() -> u32 {
        1
    }

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; job-crawler/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Freshness defaults
    pub fn hot_days() -> i64 {
        3
    }
    pub fn actively_hiring_days() -> i64 {
        3
    }

    pub fn console() -> bool {
        true
    }
}
