//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Crawl the board, build the report and persist it
//! - `dedup_by_link`: Collapse listings that share a detail link

pub mod crawl;
pub mod dedup;

pub use crawl::run_crawler;
pub use dedup::dedup_by_link;
