use crate::derived::{EventAnnotation, PeriodKey};
use serde::{Deserialize, Serialize};

/// configures the bus routes map.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RouteViewConfig {
    /// number of routes drawn from the origin city
    pub top_n: usize,
    /// arc width given to the busiest route
    pub max_width: f64,
}

impl Default for RouteViewConfig {
    fn default() -> Self {
        Self {
            top_n: 15,
            max_width: 6.0,
        }
    }
}

/// configures the train status bar chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct StatusViewConfig {
    /// largest number of stations that can be compared at once
    pub max_stations: usize,
    /// year shown when none is given, if present in the dataset. otherwise the
    /// earliest year is shown
    pub default_year: i32,
    /// number of busiest stations of `default_year` selected when no stations
    /// are given
    pub default_station_count: usize,
}

impl Default for StatusViewConfig {
    fn default() -> Self {
        Self {
            max_stations: 20,
            default_year: 2024,
            default_station_count: 15,
        }
    }
}

/// configures the ridership line chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RidershipViewConfig {
    /// last month included in the series, later rows are ignored
    pub cutoff: Option<PeriodKey>,
    /// station shown when none is given, if present in the dataset. all
    /// stations are summed otherwise
    pub default_station: Option<String>,
    pub events: Vec<EventAnnotation>,
}

impl Default for RidershipViewConfig {
    fn default() -> Self {
        Self {
            cutoff: None,
            default_station: Some(String::from("שדרות")),
            events: EventAnnotation::default_events(),
        }
    }
}
