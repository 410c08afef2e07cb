use super::{ColumnDef, ColumnType, FieldValue, Record, StatusCategory};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a row of the train timetable dataset: the count of departures with some
/// status at a station in a given month. the same rows back both the station
/// status view and the ridership series.
///
/// the source file names the year and month columns `shana` and `hodesh`, and
/// the station and status columns `train_station_nm` and `station_status_nm`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusRecord {
    #[serde(alias = "shana")]
    pub year: i32,
    #[serde(alias = "hodesh")]
    pub month: u32,
    #[serde(alias = "train_station_nm")]
    pub station_name: String,
    #[serde(alias = "station_status_nm")]
    pub status_category: StatusCategory,
    pub status_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusColumn {
    Year,
    Month,
    StationName,
    StatusCategory,
    StatusCount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMeasure {
    StatusCount,
}

impl ColumnDef for StatusColumn {
    fn column_type(&self) -> ColumnType {
        match self {
            StatusColumn::Year | StatusColumn::Month | StatusColumn::StatusCount => {
                ColumnType::Int
            }
            StatusColumn::StationName | StatusColumn::StatusCategory => ColumnType::Text,
        }
    }
}

impl Display for StatusColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusColumn::Year => "year",
            StatusColumn::Month => "month",
            StatusColumn::StationName => "station_name",
            StatusColumn::StatusCategory => "status_category",
            StatusColumn::StatusCount => "status_count",
        };
        write!(f, "{name}")
    }
}

impl Record for StatusRecord {
    type Column = StatusColumn;
    type Measure = StatusMeasure;

    fn value(&self, column: StatusColumn) -> FieldValue {
        match column {
            StatusColumn::Year => FieldValue::from(self.year),
            StatusColumn::Month => FieldValue::from(self.month),
            StatusColumn::StationName => FieldValue::from(&self.station_name),
            StatusColumn::StatusCategory => FieldValue::from(self.status_category.as_str()),
            StatusColumn::StatusCount => {
                FieldValue::Int(i64::try_from(self.status_count).unwrap_or(i64::MAX))
            }
        }
    }

    fn measure(&self, measure: StatusMeasure) -> u64 {
        match measure {
            StatusMeasure::StatusCount => self.status_count,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if (1..=12).contains(&self.month) {
            Ok(())
        } else {
            Err(format!(
                "month {} for station '{}' is outside of [1, 12]",
                self.month, self.station_name
            ))
        }
    }
}
