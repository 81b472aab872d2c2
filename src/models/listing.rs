//! Job listing data structures.

use serde::Serialize;

/// Fallback salary when the detail page has no salary element.
pub const SALARY_NOT_PROVIDED: &str = "Salary not provided";

/// Fallback skill tag when the detail page has no skill list.
pub const SKILLS_NOT_PROVIDED: &str = "Skills not provided";

/// Fields of one listing card on an index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    /// Employer name with the "Hiring" suffix stripped
    pub organization: String,

    /// Role title
    pub position: String,

    /// Years-of-experience range (e.g. "2-5")
    pub experience_range: String,

    pub location: String,

    /// Open vacancies, at least 1
    pub vacancy_count: u32,

    /// Absolute URL of the detail page
    pub link: String,
}

/// Fields of one listing's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDetail {
    pub salary: String,

    /// Raw relative-time text, `None` when the page has no features element
    pub posted_time_text: Option<String>,

    /// Skill tags, never empty
    pub skills: Vec<String>,
}

impl Default for ListingDetail {
    fn default() -> Self {
        Self {
            salary: SALARY_NOT_PROVIDED.to_string(),
            posted_time_text: None,
            skills: vec![SKILLS_NOT_PROVIDED.to_string()],
        }
    }
}

/// A fully resolved job listing.
///
/// Constructed once from a summary and its detail page; the link is the
/// identity key used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    organization: String,
    position: String,
    experience_range: String,
    vacancy_count: u32,
    location: String,
    salary: String,
    posted_time_text: Option<String>,
    skills: Vec<String>,
    link: String,
}

impl JobListing {
    /// Merge an index-page summary with its detail-page fields.
    pub fn new(summary: ListingSummary, detail: ListingDetail) -> Self {
        let skills = if detail.skills.is_empty() {
            vec![SKILLS_NOT_PROVIDED.to_string()]
        } else {
            detail.skills
        };

        Self {
            organization: summary.organization,
            position: summary.position,
            experience_range: summary.experience_range,
            vacancy_count: summary.vacancy_count.max(1),
            location: summary.location,
            salary: detail.salary,
            posted_time_text: detail.posted_time_text,
            skills,
            link: summary.link,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn experience_range(&self) -> &str {
        &self.experience_range
    }

    pub fn vacancy_count(&self) -> u32 {
        self.vacancy_count
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn posted_time_text(&self) -> Option<&str> {
        self.posted_time_text.as_deref()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Skills serialized as a single comma-joined string.
    pub fn skills_joined(&self) -> String {
        self.skills.join(",")
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ListingSummary {
        ListingSummary {
            organization: "Acme Corp".to_string(),
            position: "Backend Engineer".to_string(),
            experience_range: "2-5".to_string(),
            location: "Pune".to_string(),
            vacancy_count: 2,
            link: "https://www.example.com/job-listings-1".to_string(),
        }
    }

    #[test]
    fn test_new_merges_fields() {
        let detail = ListingDetail {
            salary: "10-15 Lacs".to_string(),
            posted_time_text: Some("3 days ago".to_string()),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        };
        let listing = JobListing::new(summary(), detail);
        assert_eq!(listing.organization(), "Acme Corp");
        assert_eq!(listing.salary(), "10-15 Lacs");
        assert_eq!(listing.posted_time_text(), Some("3 days ago"));
        assert_eq!(listing.skills_joined(), "Rust,SQL");
        assert_eq!(listing.link(), "https://www.example.com/job-listings-1");
    }

    #[test]
    fn test_new_never_leaves_skills_empty() {
        let detail = ListingDetail {
            skills: Vec::new(),
            ..ListingDetail::default()
        };
        let listing = JobListing::new(summary(), detail);
        assert_eq!(listing.skills(), [SKILLS_NOT_PROVIDED.to_string()]);
    }

    #[test]
    fn test_new_clamps_vacancy_count() {
        let mut summary = summary();
        summary.vacancy_count = 0;
        let listing = JobListing::new(summary, ListingDetail::default());
        assert_eq!(listing.vacancy_count(), 1);
    }

    #[test]
    fn test_default_detail_uses_fallbacks() {
        let detail = ListingDetail::default();
        assert_eq!(detail.salary, SALARY_NOT_PROVIDED);
        assert_eq!(detail.posted_time_text, None);
        assert_eq!(detail.skills, vec![SKILLS_NOT_PROVIDED.to_string()]);
    }
}
