// src/services/posted_time.rs

//! Relative posted-time parsing.
//!
//! Job boards print freshness as free text ("Just posted", "Today: 3h ago",
//! "Yesterday", "5 days ago"). [`PostedTime`] classifies that text and
//! resolves it against a reference timestamp supplied by the caller, so a
//! whole run shares one notion of "now".

use std::fmt;

use chrono::{DateTime, Local, TimeDelta};

use crate::utils::text::first_integer;

/// Classified relative-time text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostedTime {
    JustPosted,
    HoursAgo(i64),
    Yesterday,
    DaysAgo(i64),
    /// Text matched no pattern, or a pattern lacked its number
    Unrecognized,
}

impl PostedTime {
    /// Classify relative-time text, case-insensitively. First match wins.
    pub fn parse(text: &str) -> Self {
        let lower = text.to_lowercase();

        if lower.contains("just posted") {
            PostedTime::JustPosted
        } else if lower.contains("today") {
            first_integer(&lower).map_or(PostedTime::Unrecognized, PostedTime::HoursAgo)
        } else if lower.contains("yesterday") {
            PostedTime::Yesterday
        } else if lower.contains("day") {
            first_integer(&lower).map_or(PostedTime::Unrecognized, PostedTime::DaysAgo)
        } else {
            PostedTime::Unrecognized
        }
    }

    /// Resolve to an absolute timestamp relative to `now`.
    ///
    /// Unrecognized text resolves to `now`, as does an offset too large to
    /// represent.
    pub fn resolve(&self, now: DateTime<Local>) -> DateTime<Local> {
        let offset = match self {
            PostedTime::JustPosted | PostedTime::Unrecognized => return now,
            PostedTime::HoursAgo(hours) => TimeDelta::try_hours(*hours),
            PostedTime::Yesterday => TimeDelta::try_days(1),
            PostedTime::DaysAgo(days) => TimeDelta::try_days(*days),
        };

        offset
            .and_then(|delta| now.checked_sub_signed(delta))
            .unwrap_or(now)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PostedTime::Unrecognized)
    }
}

impl fmt::Display for PostedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostedTime::JustPosted => write!(f, "just posted"),
            PostedTime::HoursAgo(h) => write!(f, "{h} hour(s) ago"),
            PostedTime::Yesterday => write!(f, "yesterday"),
            PostedTime::DaysAgo(d) => write!(f, "{d} day(s) ago"),
            PostedTime::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Convert relative-time text into an absolute timestamp.
pub fn normalize(text: &str, now: DateTime<Local>) -> DateTime<Local> {
    PostedTime::parse(text).resolve(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(PostedTime::parse("Just posted"), PostedTime::JustPosted);
        assert_eq!(PostedTime::parse("Today: 5h ago"), PostedTime::HoursAgo(5));
        assert_eq!(PostedTime::parse("YESTERDAY"), PostedTime::Yesterday);
        assert_eq!(PostedTime::parse("3 days ago"), PostedTime::DaysAgo(3));
        assert_eq!(PostedTime::parse("30+ Days Ago"), PostedTime::DaysAgo(30));
        assert_eq!(PostedTime::parse("Few hours ago"), PostedTime::Unrecognized);
    }

    #[test]
    fn test_first_match_wins() {
        // "today" is checked before "day"
        assert_eq!(PostedTime::parse("Today 2 days"), PostedTime::HoursAgo(2));
        // "yesterday" contains "day" but is checked first
        assert_eq!(PostedTime::parse("Posted yesterday"), PostedTime::Yesterday);
    }

    #[test]
    fn test_today_without_number_is_unrecognized() {
        assert_eq!(PostedTime::parse("Today"), PostedTime::Unrecognized);
        assert_eq!(normalize("Today", now()), now());
    }

    #[test]
    fn test_day_without_number_is_unrecognized() {
        assert_eq!(PostedTime::parse("A day ago"), PostedTime::Unrecognized);
    }

    #[test]
    fn test_normalize_just_posted() {
        assert_eq!(normalize("Just posted", now()), now());
    }

    #[test]
    fn test_normalize_hours() {
        assert_eq!(
            normalize("Today: 5h ago", now()),
            now() - TimeDelta::hours(5)
        );
    }

    #[test]
    fn test_normalize_yesterday() {
        assert_eq!(normalize("Yesterday", now()), now() - TimeDelta::days(1));
    }

    #[test]
    fn test_normalize_days() {
        assert_eq!(normalize("3 days ago", now()), now() - TimeDelta::days(3));
    }

    #[test]
    fn test_normalize_unrecognized_falls_back_to_now() {
        assert_eq!(normalize("Hiring now", now()), now());
        assert_eq!(normalize("", now()), now());
    }

    #[test]
    fn test_normalize_huge_offset_falls_back_to_now() {
        assert_eq!(normalize("99999999999999 days ago", now()), now());
    }
}
