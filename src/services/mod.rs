//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Index page parsing (`IndexParser`)
//! - Detail page parsing (`DetailParser`)
//! - Relative posted-time parsing (`PostedTime`)
//! - Listing crawling (`ListingCrawler`)

mod detail;
mod index;
mod listings;
pub mod posted_time;

pub use detail::DetailParser;
pub use index::{
    EXPERIENCE_NOT_SPECIFIED, IndexParser, clean_organization, parse_vacancies,
    split_experience_location,
};
pub use listings::{CrawlOutcome, ListingCrawler};
pub use posted_time::{PostedTime, normalize};

#[cfg(test)]
pub(crate) use listings::tests as fixtures;
