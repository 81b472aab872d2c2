//! Freshness classification derived from a listing's posted date.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::FreshnessPolicy;

/// Whether a listing is recent enough to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Hot,
    Normal,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Hot => write!(f, "Hot"),
            Status::Normal => write!(f, "Normal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivelyHiring {
    Yes,
    No,
}

impl fmt::Display for ActivelyHiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivelyHiring::Yes => write!(f, "Yes"),
            ActivelyHiring::No => write!(f, "No"),
        }
    }
}

/// Derived freshness columns for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub posted_date: DateTime<Local>,
    pub days_since_posted: i64,
    pub status: Status,
    pub actively_hiring: ActivelyHiring,
}

impl Freshness {
    /// Derive freshness from a posted date and the run's reference time.
    pub fn derive(
        posted_date: DateTime<Local>,
        now: DateTime<Local>,
        policy: &FreshnessPolicy,
    ) -> Self {
        let days_since_posted = (now - posted_date).num_days();
        Self::from_days(posted_date, days_since_posted, policy)
    }

    fn from_days(
        posted_date: DateTime<Local>,
        days_since_posted: i64,
        policy: &FreshnessPolicy,
    ) -> Self {
        let status = if days_since_posted < policy.hot_days {
            Status::Hot
        } else {
            Status::Normal
        };
        let actively_hiring = if days_since_posted < policy.actively_hiring_days {
            ActivelyHiring::Yes
        } else {
            ActivelyHiring::No
        };

        Self {
            posted_date,
            days_since_posted,
            status,
            actively_hiring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_two_days_is_hot() {
        let f = Freshness::derive(now() - TimeDelta::days(2), now(), &FreshnessPolicy::default());
        assert_eq!(f.days_since_posted, 2);
        assert_eq!(f.status, Status::Hot);
        assert_eq!(f.actively_hiring, ActivelyHiring::Yes);
    }

    #[test]
    fn test_ten_days_is_normal() {
        let f = Freshness::derive(now() - TimeDelta::days(10), now(), &FreshnessPolicy::default());
        assert_eq!(f.days_since_posted, 10);
        assert_eq!(f.status, Status::Normal);
        assert_eq!(f.actively_hiring, ActivelyHiring::No);
    }

    #[test]
    fn test_partial_days_are_floored() {
        let posted = now() - TimeDelta::days(2) - TimeDelta::hours(23);
        let f = Freshness::derive(posted, now(), &FreshnessPolicy::default());
        assert_eq!(f.days_since_posted, 2);
        assert_eq!(f.status, Status::Hot);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let f = Freshness::derive(now() - TimeDelta::days(3), now(), &FreshnessPolicy::default());
        assert_eq!(f.status, Status::Normal);
    }

    #[test]
    fn test_custom_actively_hiring_threshold() {
        let policy = FreshnessPolicy {
            hot_days: 3,
            actively_hiring_days: 30,
        };
        let f = Freshness::derive(now() - TimeDelta::days(10), now(), &policy);
        assert_eq!(f.status, Status::Normal);
        assert_eq!(f.actively_hiring, ActivelyHiring::Yes);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::Hot.to_string(), "Hot");
        assert_eq!(ActivelyHiring::No.to_string(), "No");
    }
}
