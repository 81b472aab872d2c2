// src/pipeline/crawl.rs

//! Listing crawling pipeline.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::{Config, Report};
use crate::services::ListingCrawler;
use crate::storage::ReportStorage;
use crate::utils::http::PageFetcher;

/// Run the listing crawler.
///
/// `now` is the reference time every posted date and freshness value is
/// computed against. Returns `None` when no listing survived the crawl, in
/// which case nothing is printed or persisted.
pub async fn run_crawler(
    config: &Config,
    fetcher: Arc<dyn PageFetcher>,
    storage: Option<&dyn ReportStorage>,
    now: DateTime<Local>,
) -> Result<Option<Report>> {
    let started = Instant::now();
    log::info!(
        "Crawling {} page(s) from {}",
        config.num_pages,
        config.base_url
    );

    let crawler = ListingCrawler::new(config, fetcher)?;
    let outcome = crawler.fetch_all().await;

    log::info!(
        "Pages: {}/{} ok, details: {}/{} ok, duplicates skipped: {}, unrecognized times: {}, elapsed: {:.1}s",
        outcome.pages_total - outcome.page_failures,
        outcome.pages_total,
        outcome.detail_total - outcome.detail_failures,
        outcome.detail_total,
        outcome.duplicates,
        outcome.unrecognized_times,
        started.elapsed().as_secs_f64()
    );

    if outcome.listings.is_empty() {
        log::warn!("No job postings found.");
        return Ok(None);
    }

    let report = Report::build(&outcome.listings, now, &config.freshness);

    if config.output.console {
        println!("{}", report.render_table());
    }

    if let Some(storage) = storage {
        let meta = storage.write_report(&report).await?;
        log::info!(
            "Saved {} listings to {} at {}",
            meta.row_count,
            meta.location,
            meta.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    log::info!("Crawl complete: {} unique listings", report.len());
    Ok(Some(report))
}
