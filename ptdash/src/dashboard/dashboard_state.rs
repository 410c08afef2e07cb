use super::{DashboardConfig, DashboardError};
use crate::{
    loader::{LoadError, TableCache},
    model::{StatusRecord, Table, TripRecord},
    query::{
        self, AggregatedRoute, AggregatedStationStatus, RidershipSeries, SelectionOptions,
        StationSelection,
    },
};
use std::{collections::HashSet, ops::RangeInclusive, sync::Arc};

/// the three dashboard views over the configured data sources. each source
/// is loaded on first use and shared by every later query.
pub struct Dashboard {
    config: DashboardConfig,
    trips: TableCache<TripRecord>,
    statuses: TableCache<StatusRecord>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Dashboard {
        Dashboard {
            config,
            trips: TableCache::default(),
            statuses: TableCache::default(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn trips(&self) -> Result<Arc<Table<TripRecord>>, LoadError> {
        self.trips.get(&self.config.bus_source)
    }

    pub fn statuses(&self) -> Result<Arc<Table<StatusRecord>>, LoadError> {
        self.statuses.get(&self.config.train_source)
    }

    pub fn top_routes(
        &self,
        years: &HashSet<i32>,
        origin_city: &str,
    ) -> Result<Vec<AggregatedRoute>, DashboardError> {
        let trips = self.trips()?;
        let routes =
            query::compute_top_routes_with(&trips, years, origin_city, &self.config.routes)?;
        Ok(routes)
    }

    /// fills in the selections left out:
    /// * `year`: the configured default year when it is in the dataset, else
    ///   the earliest year
    /// * `stations`: the busiest stations of the default year, or none when
    ///   that year is missing from the dataset
    /// * `months`: every month present in the dataset
    pub fn station_status(
        &self,
        year: Option<i32>,
        stations: Option<&HashSet<String>>,
        months: Option<RangeInclusive<u32>>,
    ) -> Result<Vec<AggregatedStationStatus>, DashboardError> {
        let statuses = self.statuses()?;
        let status_config = &self.config.status;
        let available = query::status_years(&statuses);
        let has_default_year = available.contains(&status_config.default_year);
        let year = match (year, available.first()) {
            (Some(year), _) => year,
            (None, _) if has_default_year => status_config.default_year,
            (None, Some(earliest)) => *earliest,
            (None, None) => {
                log::info!("train dataset has no years, nothing to show");
                return Ok(vec![]);
            }
        };
        let default_selection;
        let stations = match stations {
            Some(stations) => stations,
            None => {
                default_selection = if has_default_year {
                    query::top_stations(
                        &statuses,
                        status_config.default_year,
                        status_config.default_station_count,
                    )
                    .into_iter()
                    .collect::<HashSet<_>>()
                } else {
                    HashSet::new()
                };
                log::debug!("default selection of {} stations", default_selection.len());
                &default_selection
            }
        };
        let months = months
            .or_else(|| query::month_bounds(&statuses))
            .unwrap_or(1..=12);
        let result =
            query::compute_station_status_with(&statuses, year, stations, months, status_config)?;
        Ok(result)
    }

    /// when `station` is `None`, the configured default station is used if
    /// the dataset has it, all stations otherwise. when `years` is `None`,
    /// the series covers every year of the dataset.
    pub fn ridership(
        &self,
        station: Option<&StationSelection>,
        years: Option<RangeInclusive<i32>>,
    ) -> Result<RidershipSeries, DashboardError> {
        let statuses = self.statuses()?;
        let station = match station {
            Some(station) => station.clone(),
            None => self.default_station(&statuses),
        };
        let years = match years {
            Some(years) => years,
            None => {
                let available = query::status_years(&statuses);
                match (available.first(), available.last()) {
                    (Some(first), Some(last)) => *first..=*last,
                    _ => i32::MIN..=i32::MAX,
                }
            }
        };
        let series = query::compute_ridership_series_with(
            &statuses,
            &station,
            years,
            &self.config.ridership,
        )?;
        Ok(series)
    }

    pub fn options(&self) -> Result<SelectionOptions, DashboardError> {
        let trips = self.trips()?;
        let statuses = self.statuses()?;
        Ok(SelectionOptions::new(&trips, &statuses))
    }

    fn default_station(&self, statuses: &Table<StatusRecord>) -> StationSelection {
        match &self.config.ridership.default_station {
            Some(name) if statuses.iter().any(|row| &row.station_name == name) => {
                StationSelection::Station(name.clone())
            }
            _ => StationSelection::All,
        }
    }
}
