use super::{AggregatedStationStatus, QueryError, StatusViewConfig};
use crate::{
    aggregate::group_sum,
    filter::{check_selection_size, filter, Predicate},
    model::{StatusColumn, StatusRecord, Table},
};
use std::{collections::HashSet, ops::RangeInclusive};

/// departures per status category for each selected station, within one
/// year and an inclusive month range.
pub fn compute_station_status(
    table: &Table<StatusRecord>,
    year: i32,
    stations: &HashSet<String>,
    month_range: RangeInclusive<u32>,
) -> Result<Vec<AggregatedStationStatus>, QueryError> {
    compute_station_status_with(
        table,
        year,
        stations,
        month_range,
        &StatusViewConfig::default(),
    )
}

/// rows are ordered by station name, then by the source label of the status
/// category (delayed, on time, early).
pub fn compute_station_status_with(
    table: &Table<StatusRecord>,
    year: i32,
    stations: &HashSet<String>,
    month_range: RangeInclusive<u32>,
    config: &StatusViewConfig,
) -> Result<Vec<AggregatedStationStatus>, QueryError> {
    check_selection_size(StatusColumn::StationName, stations.len(), config.max_stations)?;
    let predicates = [
        Predicate::equals(StatusColumn::Year, year),
        Predicate::is_in(StatusColumn::StationName, stations.iter()),
        Predicate::range(
            StatusColumn::Month,
            *month_range.start(),
            *month_range.end(),
        ),
    ];
    let selected = filter(table, &predicates)?;

    let mut groups = group_sum(
        selected.iter(),
        |row| (row.station_name.as_str(), row.status_category),
        |row| row.status_count,
    );
    groups.sort_by(|a, b| {
        let (a_station, a_category) = a.key;
        let (b_station, b_category) = b.key;
        a_station
            .cmp(b_station)
            .then_with(|| a_category.source_label().cmp(b_category.source_label()))
    });

    let result = groups
        .into_iter()
        .map(|group| AggregatedStationStatus {
            station_name: String::from(group.key.0),
            status_category: group.key.1,
            status_count: group.total,
        })
        .collect::<Vec<_>>();
    log::debug!("{} status groups in {year}", result.len());
    Ok(result)
}
