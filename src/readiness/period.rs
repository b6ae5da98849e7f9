//! Range selector resolution into concrete calendar windows

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReadinessError;
use crate::models::readiness::Period;

/// Requested analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "180d")]
    Days180,
    #[serde(rename = "365d")]
    Days365,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Month => "month",
            TimeRange::Days90 => "90d",
            TimeRange::Days180 => "180d",
            TimeRange::Days365 => "365d",
        }
    }

    /// Window length for rolling ranges; `None` for the calendar month
    pub fn rolling_days(&self) -> Option<u32> {
        match self {
            TimeRange::Month => None,
            TimeRange::Days90 => Some(90),
            TimeRange::Days180 => Some(180),
            TimeRange::Days365 => Some(365),
        }
    }

    /// Resolve against `now`, truncated to its UTC calendar date
    pub fn resolve(&self, now: DateTime<Utc>) -> Period {
        self.resolve_on(now.date_naive())
    }

    pub fn resolve_on(&self, today: NaiveDate) -> Period {
        match self.rolling_days() {
            Some(days) => Period {
                start: today - Duration::days(i64::from(days) - 1),
                end: today,
                day_count: days,
            },
            None => {
                let start = first_of_month(today);
                let end = last_of_month(today);
                Period {
                    start,
                    end,
                    day_count: (end - start).num_days() as u32 + 1,
                }
            }
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ReadinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Days90),
            "180d" => Ok(TimeRange::Days180),
            "365d" => Ok(TimeRange::Days365),
            other => Err(ReadinessError::InvalidRange(other.to_string())),
        }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.day0()))
}

fn last_of_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| next - Duration::days(1))
        .unwrap_or(day)
}
