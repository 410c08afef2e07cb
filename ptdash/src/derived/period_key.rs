use super::DerivationError;
use chrono::{Datelike, NaiveDate};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

/// periods are parsed as the first day of the month
const PERIOD_DATE_FORMAT: &str = "%Y-%m-%d";

/// a calendar month, written "YYYY-MM". orders chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Result<PeriodKey, DerivationError> {
        if (1..=12).contains(&month) {
            Ok(PeriodKey { year, month })
        } else {
            Err(DerivationError::InvalidMonth { year, month })
        }
    }

    /// for month literals known to be within [1, 12].
    pub(crate) const fn known(year: i32, month: u32) -> PeriodKey {
        PeriodKey { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date_str = format!("{}-01", s.trim());
        let date = NaiveDate::parse_from_str(&date_str, PERIOD_DATE_FORMAT)
            .map_err(|_| DerivationError::InvalidPeriod(String::from(s)))?;
        Ok(PeriodKey {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl Serialize for PeriodKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let period_str: String = String::deserialize(deserializer)?;
        period_str
            .parse()
            .map_err(|e| D::Error::custom(format!("Invalid period format: {e}")))
    }
}
