// src/models/report.rs

//! Tabular report of crawled listings.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::{Freshness, FreshnessPolicy, JobListing};
use crate::error::{AppError, Result};
use crate::services::posted_time::PostedTime;

/// Output columns, in order.
pub const COLUMNS: [&str; 12] = [
    "Company Name",
    "Positions",
    "Experience",
    "Salary",
    "Location",
    "Profile Name",
    "Posted Time",
    "Posted Date",
    "Status",
    "Actively Hiring",
    "Link",
    "Skills",
];

const POSTED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One output row. Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    /// Vacancy count
    #[serde(rename = "Positions")]
    pub positions: u32,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// Role title
    #[serde(rename = "Profile Name")]
    pub profile_name: String,
    #[serde(rename = "Posted Time")]
    pub posted_time: Option<String>,
    #[serde(rename = "Posted Date")]
    pub posted_date: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Actively Hiring")]
    pub actively_hiring: String,
    #[serde(rename = "Link")]
    pub link: String,
    /// Comma-joined skill tags
    #[serde(rename = "Skills")]
    pub skills: String,
}

impl ReportRow {
    /// Build a row for a listing, resolving its posted time against `now`.
    pub fn from_listing(
        listing: &JobListing,
        now: DateTime<Local>,
        policy: &FreshnessPolicy,
    ) -> Self {
        let posted_date = listing
            .posted_time_text()
            .map_or(now, |text| PostedTime::parse(text).resolve(now));
        let freshness = Freshness::derive(posted_date, now, policy);

        Self {
            company_name: listing.organization().to_string(),
            positions: listing.vacancy_count(),
            experience: listing.experience_range().to_string(),
            salary: listing.salary().to_string(),
            location: listing.location().to_string(),
            profile_name: listing.position().to_string(),
            posted_time: listing.posted_time_text().map(str::to_string),
            posted_date: freshness.posted_date.format(POSTED_DATE_FORMAT).to_string(),
            status: freshness.status.to_string(),
            actively_hiring: freshness.actively_hiring.to_string(),
            link: listing.link().to_string(),
            skills: listing.skills_joined(),
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> [String; 12] {
        [
            self.company_name.clone(),
            self.positions.to_string(),
            self.experience.clone(),
            self.salary.clone(),
            self.location.clone(),
            self.profile_name.clone(),
            self.posted_time.clone().unwrap_or_default(),
            self.posted_date.clone(),
            self.status.clone(),
            self.actively_hiring.clone(),
            self.link.clone(),
            self.skills.clone(),
        ]
    }
}

/// The final table of unique listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Build the report for deduplicated listings, preserving their order.
    pub fn build(listings: &[JobListing], now: DateTime<Local>, policy: &FreshnessPolicy) -> Self {
        let rows = listings
            .iter()
            .map(|listing| ReportRow::from_listing(listing, now, policy))
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize as CSV with a header row.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(COLUMNS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }

    /// Serialize as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.rows)?)
    }

    /// Render an aligned plain-text table for the console.
    pub fn render_table(&self) -> String {
        let rows: Vec<[String; 12]> = self.rows.iter().map(ReportRow::cells).collect();

        let mut widths = COLUMNS.map(|c| c.chars().count());
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, COLUMNS.iter().copied(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for cells in &rows {
            push_line(&mut out, cells.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingDetail, ListingSummary};
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn listing(posted: Option<&str>, skills: &[&str]) -> JobListing {
        JobListing::new(
            ListingSummary {
                organization: "Acme Corp".to_string(),
                position: "Backend Engineer".to_string(),
                experience_range: "2-5".to_string(),
                location: "Pune, Mumbai".to_string(),
                vacancy_count: 3,
                link: "https://www.example.com/job-listings-1".to_string(),
            },
            ListingDetail {
                salary: "10-15 Lacs".to_string(),
                posted_time_text: posted.map(str::to_string),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[test]
    fn test_row_maps_columns() {
        let row = ReportRow::from_listing(
            &listing(Some("5 days ago"), &["Rust", "SQL"]),
            now(),
            &FreshnessPolicy::default(),
        );
        assert_eq!(row.company_name, "Acme Corp");
        assert_eq!(row.positions, 3);
        assert_eq!(row.profile_name, "Backend Engineer");
        assert_eq!(row.posted_time.as_deref(), Some("5 days ago"));
        assert_eq!(row.posted_date, "2024-06-10 12:00:00");
        assert_eq!(row.status, "Normal");
        assert_eq!(row.actively_hiring, "No");
        assert_eq!(row.skills, "Rust,SQL");
    }

    #[test]
    fn test_missing_posted_time_defaults_to_now() {
        let row = ReportRow::from_listing(
            &listing(None, &["Rust"]),
            now(),
            &FreshnessPolicy::default(),
        );
        assert_eq!(row.posted_time, None);
        assert_eq!(row.posted_date, "2024-06-15 12:00:00");
        assert_eq!(row.status, "Hot");
        assert_eq!(row.actively_hiring, "Yes");
    }

    #[test]
    fn test_csv_has_header_and_joined_skills() {
        let report = Report::build(
            &[listing(Some("Yesterday"), &["Rust", "SQL"])],
            now(),
            &FreshnessPolicy::default(),
        );
        let csv = String::from_utf8(report.to_csv().unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Acme Corp,3,2-5,10-15 Lacs,\"Pune, Mumbai\""));
        assert!(row.ends_with("\"Rust,SQL\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_uses_column_names() {
        let report = Report::build(&[listing(None, &["Rust"])], now(), &FreshnessPolicy::default());
        let value: serde_json::Value = serde_json::from_slice(&report.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["Company Name"], "Acme Corp");
        assert_eq!(value[0]["Positions"], 3);
        assert!(value[0]["Posted Time"].is_null());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let report = Report::build(&[listing(None, &["Rust"])], now(), &FreshnessPolicy::default());
        let table = report.render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Company Name | Positions |"));
        assert!(lines[1].starts_with("------------ | --------- |"));
        assert!(lines[2].starts_with("Acme Corp    | 3         |"));
    }
}
