use crate::model::StatusCategory;
use serde::{Deserialize, Serialize};

/// one segment of the stacked status bar of a station.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AggregatedStationStatus {
    pub station_name: String,
    pub status_category: StatusCategory,
    pub status_count: u64,
}
