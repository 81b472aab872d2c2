// src/services/listings.rs

//! Listing crawler service.
//!
//! Walks the index pages in order, fetches each discovered detail page one
//! at a time and merges both into [`JobListing`]s.

use std::collections::HashSet;
use std::sync::Arc;

use url::Url;

use crate::error::Result;
use crate::models::{Config, JobListing, ListingSummary};
use crate::pipeline::dedup_by_link;
use crate::services::{DetailParser, IndexParser, PostedTime};
use crate::utils::http::PageFetcher;
use crate::utils::page_url;

/// Summary of a crawl run.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Unique listings in first-seen order
    pub listings: Vec<JobListing>,
    pub pages_total: usize,
    pub page_failures: usize,
    pub detail_total: usize,
    pub detail_failures: usize,
    /// Cards whose link was already collected from an earlier card
    pub duplicates: usize,
    /// Listings whose posted-time text fell back to the reference time
    pub unrecognized_times: usize,
}

/// Service for crawling listings from a paginated job board.
pub struct ListingCrawler {
    base_url: Url,
    num_pages: u32,
    fetcher: Arc<dyn PageFetcher>,
    index: IndexParser,
    detail: DetailParser,
}

impl ListingCrawler {
    /// Create a crawler for the board described by `config`.
    pub fn new(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            base_url,
            num_pages: config.num_pages,
            fetcher,
            index: IndexParser::new(&config.selectors)?,
            detail: DetailParser::new(&config.selectors)?,
        })
    }

    /// Crawl pages `1..=num_pages` sequentially.
    ///
    /// Fetch failures never abort the run: a failed index page contributes
    /// no listings and a failed detail page drops that one listing.
    pub async fn fetch_all(&self) -> CrawlOutcome {
        let mut outcome = CrawlOutcome {
            pages_total: self.num_pages as usize,
            ..CrawlOutcome::default()
        };
        let mut seen = HashSet::new();
        let mut listings = Vec::new();

        for page in 1..=self.num_pages {
            log::info!("Scraping page {}...", page);

            let summaries = match self.fetch_index_page(page).await {
                Ok(summaries) => summaries,
                Err(error) => {
                    outcome.page_failures += 1;
                    log::warn!("Failed to retrieve index page {}: {}", page, error);
                    continue;
                }
            };

            for summary in summaries {
                if seen.contains(&summary.link) {
                    outcome.duplicates += 1;
                    log::debug!("Skipping duplicate listing {}", summary.link);
                    continue;
                }

                outcome.detail_total += 1;
                match self.fetch_listing(summary).await {
                    Ok(listing) => {
                        if Self::has_unrecognized_time(&listing) {
                            outcome.unrecognized_times += 1;
                        }
                        seen.insert(listing.link().to_string());
                        listings.push(listing);
                    }
                    Err(error) => {
                        outcome.detail_failures += 1;
                        log::warn!("Failed to fetch listing detail: {}", error);
                    }
                }
            }
        }

        outcome.listings = dedup_by_link(listings);
        outcome
    }

    /// Warn about posted-time text that will resolve to the reference time.
    fn has_unrecognized_time(listing: &JobListing) -> bool {
        match listing.posted_time_text() {
            Some(text) if !PostedTime::parse(text).is_recognized() => {
                log::warn!(
                    "Unrecognized posted time '{}' for {}; treating as just posted",
                    text,
                    listing.link()
                );
                true
            }
            _ => false,
        }
    }

    /// Fetch one index page and parse its listing cards.
    async fn fetch_index_page(&self, page: u32) -> Result<Vec<ListingSummary>> {
        let url = page_url(&self.base_url, page);
        let html = self.fetcher.fetch(url.as_str()).await?;
        let summaries = self.index.parse(&html, &url);
        log::debug!("Found {} listings on {}", summaries.len(), url);
        Ok(summaries)
    }

    /// Fetch the detail page for a summary and merge both.
    async fn fetch_listing(&self, summary: ListingSummary) -> Result<JobListing> {
        let html = self.fetcher.fetch(&summary.link).await?;
        let detail = self.detail.parse(&html);
        Ok(JobListing::new(summary, detail))
    }
}
