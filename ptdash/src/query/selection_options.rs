use crate::{
    aggregate::{group_sum, top_n},
    model::{StatusRecord, Table, TripRecord},
};
use itertools::Itertools;
use serde::Serialize;
use std::{collections::HashSet, ops::RangeInclusive};

/// distinct years of the bus dataset, ascending.
pub fn available_years(table: &Table<TripRecord>) -> Vec<i32> {
    table.iter().map(|row| row.year).unique().sorted().collect()
}

/// distinct origin cities with trips in any of `years`, sorted by name.
pub fn origin_cities(table: &Table<TripRecord>, years: &HashSet<i32>) -> Vec<String> {
    table
        .iter()
        .filter(|row| years.contains(&row.year))
        .map(|row| row.origin_city.as_str())
        .unique()
        .sorted()
        .map(String::from)
        .collect()
}

/// distinct years of the train dataset, ascending.
pub fn status_years(table: &Table<StatusRecord>) -> Vec<i32> {
    table.iter().map(|row| row.year).unique().sorted().collect()
}

/// every station of the train dataset, busiest first over all years.
pub fn station_names(table: &Table<StatusRecord>) -> Vec<String> {
    rank_stations(table.iter(), usize::MAX)
}

/// the smallest and largest month present, or `None` for an empty table.
pub fn month_bounds(table: &Table<StatusRecord>) -> Option<RangeInclusive<u32>> {
    table
        .iter()
        .map(|row| row.month)
        .minmax()
        .into_option()
        .map(|(lo, hi)| lo..=hi)
}

/// the `n` busiest stations of one year. this is the station selection used
/// when none is given.
pub fn top_stations(table: &Table<StatusRecord>, year: i32, n: usize) -> Vec<String> {
    rank_stations(table.iter().filter(|row| row.year == year), n)
}

fn rank_stations<'a>(rows: impl Iterator<Item = &'a StatusRecord>, n: usize) -> Vec<String> {
    let totals = group_sum(rows, |row| row.station_name.as_str(), |row| row.status_count);
    top_n(totals, n, |group| group.total)
        .into_iter()
        .map(|group| String::from(group.key))
        .collect()
}

/// the values a user can pick from in each view.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SelectionOptions {
    pub bus_years: Vec<i32>,
    pub origin_cities: Vec<String>,
    pub train_years: Vec<i32>,
    pub stations: Vec<String>,
    pub month_bounds: Option<(u32, u32)>,
}

impl SelectionOptions {
    /// options over the full tables, origin cities across every bus year.
    pub fn new(trips: &Table<TripRecord>, statuses: &Table<StatusRecord>) -> SelectionOptions {
        let bus_years = available_years(trips);
        let all_years = bus_years.iter().copied().collect::<HashSet<_>>();
        SelectionOptions {
            origin_cities: origin_cities(trips, &all_years),
            bus_years,
            train_years: status_years(statuses),
            stations: station_names(statuses),
            month_bounds: month_bounds(statuses).map(|r| (*r.start(), *r.end())),
        }
    }
}
