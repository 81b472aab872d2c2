// src/services/detail.rs

//! Detail page parser.
//!
//! Extracts salary, posted-time text and skill tags from one listing's
//! detail page. Each field falls back independently when absent.

use scraper::{Html, Selector};

use crate::error::Result;
use crate::models::{
    ListingDetail, ListingSelectors, SALARY_NOT_PROVIDED, SKILLS_NOT_PROVIDED, parse_selector,
};
use crate::utils::text::normalize_whitespace;

/// Parser for listing detail pages.
pub struct DetailParser {
    salary: Selector,
    posted_time: Selector,
    skills: Selector,
    skill_item: Selector,
}

impl DetailParser {
    /// Compile the detail-page selectors.
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            salary: parse_selector(&selectors.salary)?,
            posted_time: parse_selector(&selectors.posted_time)?,
            skills: parse_selector(&selectors.skills)?,
            skill_item: parse_selector(&selectors.skill_item)?,
        })
    }

    pub fn parse(&self, html: &str) -> ListingDetail {
        let document = Html::parse_document(html);

        let salary = self
            .first_text(&document, &self.salary)
            .unwrap_or_else(|| SALARY_NOT_PROVIDED.to_string());

        let posted_time_text = self.first_text(&document, &self.posted_time);

        let skills: Vec<String> = document
            .select(&self.skills)
            .next()
            .map(|list| {
                list.select(&self.skill_item)
                    .map(|item| normalize_whitespace(&item.text().collect::<String>()))
                    .filter(|skill| !skill.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let skills = if skills.is_empty() {
            vec![SKILLS_NOT_PROVIDED.to_string()]
        } else {
            skills
        };

        ListingDetail {
            salary,
            posted_time_text,
            skills,
        }
    }

    fn first_text(&self, document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .next()
            .map(|el| normalize_whitespace(&el.text().collect::<String>()))
    }
}
