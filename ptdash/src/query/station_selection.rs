use serde::{Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

pub const ALL_STATIONS: &str = "All";

/// the station filter of the ridership view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StationSelection {
    /// sums over every station
    All,
    Station(String),
}

impl Display for StationSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationSelection::All => write!(f, "{ALL_STATIONS}"),
            StationSelection::Station(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for StationSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(String::from("station name cannot be empty"))
        } else if trimmed.eq_ignore_ascii_case(ALL_STATIONS) {
            Ok(StationSelection::All)
        } else {
            Ok(StationSelection::Station(String::from(trimmed)))
        }
    }
}

impl Serialize for StationSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
