// src/pipeline/dedup.rs

//! Link-keyed deduplication of crawled listings.

use std::collections::HashSet;

use crate::models::JobListing;

/// Keep the first listing for each link, preserving order.
pub fn dedup_by_link(listings: Vec<JobListing>) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(listings.len());
    for listing in listings {
        if seen.insert(listing.link().to_string()) {
            deduped.push(listing);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingDetail, ListingSummary};

    fn listing(org: &str, link: &str) -> JobListing {
        JobListing::new(
            ListingSummary {
                organization: org.to_string(),
                position: "Engineer".to_string(),
                experience_range: "1-3".to_string(),
                location: "Pune".to_string(),
                vacancy_count: 1,
                link: link.to_string(),
            },
            ListingDetail::default(),
        )
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let deduped = dedup_by_link(vec![
            listing("Acme", "https://example.com/a"),
            listing("Globex", "https://example.com/b"),
            listing("Acme Again", "https://example.com/a"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].organization(), "Acme");
        assert_eq!(deduped[1].organization(), "Globex");
    }

    #[test]
    fn test_is_idempotent() {
        let once = dedup_by_link(vec![
            listing("Acme", "https://example.com/a"),
            listing("Acme", "https://example.com/a"),
            listing("Globex", "https://example.com/b"),
        ]);
        let twice = dedup_by_link(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_by_link(Vec::new()).is_empty());
    }
}
