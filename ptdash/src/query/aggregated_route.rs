use crate::model::TripRecord;
use serde::{Deserialize, Serialize};

/// a bus route from the selected origin city with its total trips over the
/// selected years. `normalized_width` is the arc width in [0, max_width].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AggregatedRoute {
    pub origin_city: String,
    pub destination_city: String,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
    pub trip_count: u64,
    pub normalized_width: f64,
}

impl AggregatedRoute {
    /// takes names and coordinates from `first`, the earliest row of the route.
    pub fn new(first: &TripRecord, trip_count: u64, normalized_width: f64) -> AggregatedRoute {
        AggregatedRoute {
            origin_city: first.origin_city.clone(),
            destination_city: first.destination_city.clone(),
            origin_lat: first.origin_lat,
            origin_lon: first.origin_lon,
            dest_lat: first.dest_lat,
            dest_lon: first.dest_lon,
            trip_count,
            normalized_width,
        }
    }
}
