use super::{AggregatedRoute, QueryError, RouteViewConfig};
use crate::{
    aggregate::{group_sum, top_n},
    derived::normalize_width,
    filter::{filter, Predicate},
    model::{Table, TripColumn, TripRecord},
};
use std::collections::HashSet;

/// the busiest bus routes leaving `origin_city` over the selected years,
/// using the default view settings (15 routes, widths up to 6).
pub fn compute_top_routes(
    table: &Table<TripRecord>,
    years: &HashSet<i32>,
    origin_city: &str,
) -> Result<Vec<AggregatedRoute>, QueryError> {
    compute_top_routes_with(table, years, origin_city, &RouteViewConfig::default())
}

/// trips are summed per (origin, destination) across every selected year.
/// each route takes its coordinates from its first row in the table. routes
/// with equal totals keep the order in which they first appear.
pub fn compute_top_routes_with(
    table: &Table<TripRecord>,
    years: &HashSet<i32>,
    origin_city: &str,
    config: &RouteViewConfig,
) -> Result<Vec<AggregatedRoute>, QueryError> {
    let predicates = [
        Predicate::is_in(TripColumn::Year, years.iter().copied()),
        Predicate::equals(TripColumn::OriginCity, origin_city),
    ];
    let selected = filter(table, &predicates)?;
    let routes = group_sum(
        selected.iter(),
        |row| (row.origin_city.as_str(), row.destination_city.as_str()),
        |row| row.trip_count,
    );
    let top = top_n(routes, config.top_n, |group| group.total);
    if top.is_empty() {
        log::info!("no bus routes from '{origin_city}' in the selected years");
        return Ok(vec![]);
    }

    let widths = normalize_width(&top, |group| group.total, config.max_width)?;
    let result = top
        .iter()
        .zip(widths)
        .map(|(group, width)| AggregatedRoute::new(group.first, group.total, width))
        .collect::<Vec<_>>();
    log::debug!("{} routes from '{origin_city}'", result.len());
    Ok(result)
}
