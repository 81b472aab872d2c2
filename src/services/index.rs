// src/services/index.rs

//! Index page parser.
//!
//! Extracts listing summaries from one paginated results page. Each listing
//! card is located once and all of its fields are queried relative to it.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{ListingSelectors, ListingSummary, parse_selector};
use crate::utils::resolve_url;
use crate::utils::text::{first_integer, normalize_whitespace};

/// Marker that separates the employer name from the hiring blurb.
const HIRING_MARKER: &str = " Hiring";

/// Markup artifact that stands in for a location separator.
const LOCATION_ARTIFACT: &str = "+4";

/// Experience value when the card has no "Yrs" marker.
pub const EXPERIENCE_NOT_SPECIFIED: &str = "Not specified";

static EXPERIENCE_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<experience>.*?)\s*Yrs?(?P<location>.*)$").expect("valid experience pattern")
});

/// Parser for listing cards on an index page.
pub struct IndexParser {
    card: Selector,
    organization: Selector,
    experience_location: Selector,
    vacancies: Selector,
    title: Selector,
    title_link: Selector,
    attr_name: String,
}

impl IndexParser {
    /// Compile the index-page selectors.
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            card: parse_selector(&selectors.card)?,
            organization: parse_selector(&selectors.organization)?,
            experience_location: parse_selector(&selectors.experience_location)?,
            vacancies: parse_selector(&selectors.vacancies)?,
            title: parse_selector(&selectors.title)?,
            title_link: parse_selector(&selectors.title_link)?,
            attr_name: selectors.attr_name.clone(),
        })
    }

    /// Parse every listing card on the page, in document order.
    ///
    /// Relative detail links are resolved against `page_url`. Cards missing
    /// a required field are skipped.
    pub fn parse(&self, html: &str, page_url: &Url) -> Vec<ListingSummary> {
        let document = Html::parse_document(html);

        document
            .select(&self.card)
            .enumerate()
            .filter_map(|(index, card)| {
                let summary = self.parse_card(&card, page_url);
                if summary.is_none() {
                    log::debug!(
                        "Skipping incomplete listing card #{} on {}",
                        index + 1,
                        page_url
                    );
                }
                summary
            })
            .collect()
    }

    fn parse_card(&self, card: &ElementRef, page_url: &Url) -> Option<ListingSummary> {
        let organization = card.select(&self.organization).next()?;
        let organization = clean_organization(&element_text(organization));

        let experience_location = card.select(&self.experience_location).next()?;
        let (experience_range, location) =
            split_experience_location(&element_text(experience_location));

        let vacancy_count = card
            .select(&self.vacancies)
            .next()
            .map(|el| parse_vacancies(&element_text(el)))
            .unwrap_or(1);

        let title = card.select(&self.title).next()?;
        let position = element_text(title);
        let href = title
            .select(&self.title_link)
            .next()
            .and_then(|a| a.value().attr(&self.attr_name))
            .map(str::trim)
            .filter(|href| !href.is_empty())?;
        let link = resolve_url(page_url, href);

        Some(ListingSummary {
            organization,
            position,
            experience_range,
            location,
            vacancy_count,
            link,
        })
    }
}

fn element_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Strip the trailing "Hiring ..." blurb from an employer name.
pub fn clean_organization(text: &str) -> String {
    text.split(HIRING_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Split "<experience> Yrs <location>" into its two parts.
pub fn split_experience_location(text: &str) -> (String, String) {
    match EXPERIENCE_LOCATION.captures(text) {
        Some(caps) => (
            caps["experience"].trim().to_string(),
            clean_location(&caps["location"]),
        ),
        None => (EXPERIENCE_NOT_SPECIFIED.to_string(), clean_location(text)),
    }
}

fn clean_location(text: &str) -> String {
    text.replace(LOCATION_ARTIFACT, ", ").trim().to_string()
}

/// First embedded integer of the vacancy text, or 1.
pub fn parse_vacancies(text: &str) -> u32 {
    first_integer::<u32>(text).filter(|n| *n > 0).unwrap_or(1)
}
