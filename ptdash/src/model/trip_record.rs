use super::{ColumnDef, ColumnType, FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a row of the bus trips dataset: trip counts between a pair of cities in
/// some year. several rows may share the same (origin, destination, year).
///
/// CSV rows as provided by the bus data partitions:
/// year,origin_yishuv_nm,destination_yishuv_nm,lat_origin,lon_origin,lat_dest,lon_dest,trips_count
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripRecord {
    pub year: i32,
    #[serde(alias = "origin_yishuv_nm")]
    pub origin_city: String,
    #[serde(alias = "destination_yishuv_nm")]
    pub destination_city: String,
    #[serde(alias = "lat_origin")]
    pub origin_lat: f64,
    #[serde(alias = "lon_origin")]
    pub origin_lon: f64,
    #[serde(alias = "lat_dest")]
    pub dest_lat: f64,
    #[serde(alias = "lon_dest")]
    pub dest_lon: f64,
    #[serde(alias = "trips_count")]
    pub trip_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TripColumn {
    Year,
    OriginCity,
    DestinationCity,
    OriginLat,
    OriginLon,
    DestLat,
    DestLon,
    TripCount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripMeasure {
    TripCount,
}

impl ColumnDef for TripColumn {
    fn column_type(&self) -> ColumnType {
        match self {
            TripColumn::Year | TripColumn::TripCount => ColumnType::Int,
            TripColumn::OriginCity | TripColumn::DestinationCity => ColumnType::Text,
            TripColumn::OriginLat
            | TripColumn::OriginLon
            | TripColumn::DestLat
            | TripColumn::DestLon => ColumnType::Float,
        }
    }
}

impl Display for TripColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TripColumn::Year => "year",
            TripColumn::OriginCity => "origin_city",
            TripColumn::DestinationCity => "destination_city",
            TripColumn::OriginLat => "origin_lat",
            TripColumn::OriginLon => "origin_lon",
            TripColumn::DestLat => "dest_lat",
            TripColumn::DestLon => "dest_lon",
            TripColumn::TripCount => "trip_count",
        };
        write!(f, "{name}")
    }
}

impl Record for TripRecord {
    type Column = TripColumn;
    type Measure = TripMeasure;

    fn value(&self, column: TripColumn) -> FieldValue {
        match column {
            TripColumn::Year => FieldValue::from(self.year),
            TripColumn::OriginCity => FieldValue::from(&self.origin_city),
            TripColumn::DestinationCity => FieldValue::from(&self.destination_city),
            TripColumn::OriginLat => FieldValue::from(self.origin_lat),
            TripColumn::OriginLon => FieldValue::from(self.origin_lon),
            TripColumn::DestLat => FieldValue::from(self.dest_lat),
            TripColumn::DestLon => FieldValue::from(self.dest_lon),
            TripColumn::TripCount => {
                FieldValue::Int(i64::try_from(self.trip_count).unwrap_or(i64::MAX))
            }
        }
    }

    fn measure(&self, measure: TripMeasure) -> u64 {
        match measure {
            TripMeasure::TripCount => self.trip_count,
        }
    }
}
