// src/models/selectors.rs

//! CSS selectors for scraping job-board index and detail pages.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CSS selectors for scraping listing cards and detail pages.
///
/// Card fields are queried relative to each `card` element, so a card that
/// lacks one of them never shifts the fields of its neighbours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingSelectors {
    /// Root container of one listing on an index page
    pub card: String,

    /// Employer name element within a card
    pub organization: String,

    /// Combined "<experience> Yrs <location>" element within a card
    pub experience_location: String,

    /// Vacancy detail element within a card
    pub vacancies: String,

    /// Listing title element within a card
    pub title: String,

    /// Link element within the title element
    pub title_link: String,

    /// HTML attribute name for extracting links (usually "href")
    pub attr_name: String,

    /// Salary element on the detail page
    pub salary: String,

    /// Features element holding the posted-time text on the detail page
    pub posted_time: String,

    /// Skill list element on the detail page
    pub skills: String,

    /// Item element within the skill list
    pub skill_item: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card: r#"div[class*="jobCard_jobCard__"]"#.to_string(),
            organization: "div.jobCard_jobCard_cName__mYnow".to_string(),
            experience_location: "div.jobCard_jobCard_lists__fdnsc".to_string(),
            vacancies: "ul.jobCard_jobCard_jobDetail__jD82J".to_string(),
            title: r#"h2[itemprop="name"]"#.to_string(),
            title_link: "a".to_string(),
            attr_name: "href".to_string(),
            salary: "div.jobTitle_jobTitle_salary__3bSw0".to_string(),
            posted_time: "div.JobDetailWidget_jobCard_features__iHE_w".to_string(),
            skills: "ul.keyskills_keySkills_items__ej9_3".to_string(),
            skill_item: "li".to_string(),
        }
    }
}

impl ListingSelectors {
    /// All selectors paired with their config key, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("card", self.card.as_str()),
            ("organization", self.organization.as_str()),
            ("experience_location", self.experience_location.as_str()),
            ("vacancies", self.vacancies.as_str()),
            ("title", self.title.as_str()),
            ("title_link", self.title_link.as_str()),
            ("salary", self.salary.as_str()),
            ("posted_time", self.posted_time.as_str()),
            ("skills", self.skills.as_str()),
            ("skill_item", self.skill_item.as_str()),
        ]
    }

    /// Check that every selector compiles.
    pub fn validate(&self) -> Result<()> {
        for (key, selector) in self.entries() {
            parse_selector(selector).inspect_err(|e| log::error!("selectors.{key}: {e}"))?;
        }
        if self.attr_name.trim().is_empty() {
            return Err(AppError::validation("selectors.attr_name is empty"));
        }
        Ok(())
    }
}

/// Compile a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_compile() {
        assert!(ListingSelectors::default().validate().is_ok());
    }

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector(r#"h2[itemprop="name"]"#).is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_selector() {
        let selectors = ListingSelectors {
            salary: "div[".to_string(),
            ..ListingSelectors::default()
        };
        assert!(matches!(
            selectors.validate(),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let selectors: ListingSelectors = toml::from_str(r#"salary = "span.pay""#).unwrap();
        assert_eq!(selectors.salary, "span.pay");
        assert_eq!(selectors.skill_item, "li");
    }
}
