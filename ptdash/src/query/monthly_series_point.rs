use super::StationSelection;
use crate::derived::{EventAnnotation, PeriodKey};
use serde::Serialize;

/// total departures in one month of the ridership series.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MonthlySeriesPoint {
    pub period_key: PeriodKey,
    pub year: i32,
    pub month: u32,
    pub status_count: u64,
    pub sequence_index: usize,
}

/// an event annotation located on the series.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventMarker {
    #[serde(flatten)]
    pub annotation: EventAnnotation,
    pub sequence_index: usize,
    pub status_count: u64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RidershipSeries {
    pub station: StationSelection,
    pub points: Vec<MonthlySeriesPoint>,
    pub events: Vec<EventMarker>,
}
