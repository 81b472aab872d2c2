// src/lib.rs

//! Job-board listing crawler library.
//!
//! Crawls paginated index pages, parses each listing card and its detail
//! page, deduplicates by detail link and builds a freshness-annotated report.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
