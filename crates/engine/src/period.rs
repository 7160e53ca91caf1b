//! Calendar month identifiers (`YYYY-MM`).

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::EngineError;

/// A calendar month, written `YYYY-MM`.
///
/// Periods are always derived from the UTC year and month of a timestamp, so
/// an expense recorded at `2025-06-30T23:30:00-02:00` belongs to `2025-07`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Builds a period, rejecting months outside `1..=12` and years that do
    /// not fit four digits.
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod(format!(
                "month must be between 01 and 12, got {month}"
            )));
        }
        if !(0..=9999).contains(&year) {
            return Err(EngineError::InvalidPeriod(format!(
                "year must have four digits, got {year}"
            )));
        }
        Ok(Self { year, month })
    }

    #[must_use]
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }

    /// The period containing `now`.
    #[must_use]
    pub fn current(now: &DateTime<Utc>) -> Self {
        Self::from_datetime(now)
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod(format!("expected YYYY-MM, got \"{s}\""));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let period: Period = "2025-06".parse().unwrap();
        assert_eq!(period.year(), 2025);
        assert_eq!(period.month(), 6);
        assert_eq!(period.to_string(), "2025-06");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for raw in ["2025-6", "2025-13", "2025-00", "25-06", "2025/06", "2025-06-01", ""] {
            assert!(raw.parse::<Period>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn derived_from_utc_month() {
        let offset = FixedOffset::west_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2025, 6, 30, 23, 30, 0).unwrap();
        let period = Period::from_datetime(&local.with_timezone(&Utc));
        assert_eq!(period.to_string(), "2025-07");
    }
}
