// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod freshness;
mod listing;
mod report;
mod selectors;

// Re-export all public types
pub use config::{Config, CrawlerConfig, FreshnessPolicy, OutputConfig, ReportFormat};
pub use freshness::{ActivelyHiring, Freshness, Status};
pub use listing::{
    JobListing, ListingDetail, ListingSummary, SALARY_NOT_PROVIDED, SKILLS_NOT_PROVIDED,
};
pub use report::{COLUMNS, Report, ReportRow};
pub use selectors::{ListingSelectors, parse_selector};
