use super::{
    EventMarker, MonthlySeriesPoint, QueryError, RidershipSeries, RidershipViewConfig,
    StationSelection,
};
use crate::{
    aggregate::group_sum,
    derived::{assign_sequence, build_period_key, event_markers, DerivationError},
    filter::{filter, Predicate},
    model::{StatusColumn, StatusRecord, Table},
};
use std::ops::RangeInclusive;

/// total departures per month over an inclusive range of years, for one
/// station or all of them, annotated with the default events.
pub fn compute_ridership_series(
    table: &Table<StatusRecord>,
    station: &StationSelection,
    year_range: RangeInclusive<i32>,
) -> Result<RidershipSeries, QueryError> {
    compute_ridership_series_with(table, station, year_range, &RidershipViewConfig::default())
}

/// as [`compute_ridership_series`]. months after `config.cutoff` are left out,
/// and only the events in `config.events` that fall on a point are marked.
pub fn compute_ridership_series_with(
    table: &Table<StatusRecord>,
    station: &StationSelection,
    year_range: RangeInclusive<i32>,
    config: &RidershipViewConfig,
) -> Result<RidershipSeries, QueryError> {
    let mut predicates = vec![Predicate::range(
        StatusColumn::Year,
        *year_range.start(),
        *year_range.end(),
    )];
    if let StationSelection::Station(name) = station {
        predicates.push(Predicate::equals(StatusColumn::StationName, name));
    }
    let selected = filter(table, &predicates)?;

    let within_cutoff = |row: &StatusRecord| match config.cutoff {
        Some(cutoff) => (row.year, row.month) <= (cutoff.year(), cutoff.month()),
        None => true,
    };
    let monthly = group_sum(
        selected.iter().filter(|row| within_cutoff(*row)),
        |row| (row.year, row.month),
        |row| row.status_count,
    );
    let points = assign_sequence(monthly, |group| group.key.0, |group| group.key.1)
        .into_iter()
        .map(|sequenced| -> Result<MonthlySeriesPoint, DerivationError> {
            let (year, month) = sequenced.row.key;
            Ok(MonthlySeriesPoint {
                period_key: build_period_key(year, month)?,
                year,
                month,
                status_count: sequenced.row.total,
                sequence_index: sequenced.sequence_index,
            })
        })
        .collect::<Result<Vec<_>, DerivationError>>()?;

    let events = event_markers(&points, |point| point.period_key, &config.events)
        .into_iter()
        .map(|(index, annotation)| EventMarker {
            annotation: annotation.clone(),
            sequence_index: points[index].sequence_index,
            status_count: points[index].status_count,
        })
        .collect::<Vec<_>>();

    log::debug!(
        "ridership series for {station}: {} months, {} events",
        points.len(),
        events.len()
    );
    Ok(RidershipSeries {
        station: station.clone(),
        points,
        events,
    })
}

#[cfg(test)]
mod test {
    use super::{compute_ridership_series, compute_ridership_series_with};
    use crate::derived::{EventAnnotation, PeriodKey};
    use crate::filter::FilterError;
    use crate::model::{StatusCategory, StatusRecord, Table};
    use crate::query::{QueryError, RidershipViewConfig, StationSelection};

    fn status(year: i32, month: u32, station: &str, status_count: u64) -> StatusRecord {
        StatusRecord {
            year,
            month,
            station_name: String::from(station),
            status_category: StatusCategory::OnTime,
            status_count,
        }
    }

    /// two stations, every month from 2019 through 2024. rows are stored
    /// newest first to exercise the ordering of the series.
    fn six_years() -> Table<StatusRecord> {
        let mut rows = vec![];
        for year in (2019..=2024).rev() {
            for month in (1..=12).rev() {
                rows.push(status(year, month, "Sderot", u64::from(month)));
                rows.push(status(year, month, "Haifa", 100));
            }
        }
        Table::new(rows)
    }

    fn period(s: &str) -> PeriodKey {
        s.parse().expect("valid period")
    }

    #[test]
    fn test_single_year_all_stations() {
        let series = compute_ridership_series(&six_years(), &StationSelection::All, 2020..=2020)
            .expect("query succeeds");
        assert_eq!(series.points.len(), 12);
        for (idx, point) in series.points.iter().enumerate() {
            assert_eq!(point.sequence_index, idx);
            assert_eq!(point.year, 2020);
            assert_eq!(point.month as usize, idx + 1);
            assert_eq!(point.status_count, 100 + u64::from(point.month));
        }
        assert_eq!(series.points[0].period_key.to_string(), "2020-01");
        // both corona events fall in 2020, the later events do not
        let names = series
            .events
            .iter()
            .map(|e| e.annotation.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Corona", "Corona 2"]);
        assert_eq!(series.events[0].sequence_index, 2);
        assert_eq!(series.events[1].sequence_index, 11);
        assert_eq!(series.events[1].status_count, 112);
    }

    #[test]
    fn test_single_station() {
        let station = StationSelection::Station(String::from("Sderot"));
        let series = compute_ridership_series(&six_years(), &station, 2023..=2024)
            .expect("query succeeds");
        assert_eq!(series.points.len(), 24);
        assert_eq!(series.points[0].period_key, period("2023-01"));
        assert_eq!(series.points[23].period_key, period("2024-12"));
        assert!(series.points.iter().all(|p| p.status_count == u64::from(p.month)));
        assert!(series
            .points
            .windows(2)
            .all(|w| (w[0].year, w[0].month) < (w[1].year, w[1].month)));
        let war = series
            .events
            .iter()
            .find(|e| e.annotation.label == "War")
            .expect("war event is inside the series");
        assert_eq!(war.sequence_index, 9);
        assert_eq!(war.status_count, 10);
    }

    #[test]
    fn test_cutoff_drops_later_months_and_events() {
        let config = RidershipViewConfig {
            cutoff: Some(period("2024-04")),
            ..RidershipViewConfig::default()
        };
        let series =
            compute_ridership_series_with(&six_years(), &StationSelection::All, 2024..=2024, &config)
                .expect("query succeeds");
        assert_eq!(series.points.len(), 4);
        assert_eq!(series.points[3].period_key, period("2024-04"));
        // repair work in 2024-05 has no point to mark
        assert!(series.events.is_empty());
    }

    #[test]
    fn test_custom_events() {
        let config = RidershipViewConfig {
            events: vec![
                EventAnnotation::new("Strike", period("2021-06"), "Strike", "#000000", (0, 0)),
                EventAnnotation::new("Future", period("2030-01"), "Future", "#000000", (0, 0)),
            ],
            ..RidershipViewConfig::default()
        };
        let series =
            compute_ridership_series_with(&six_years(), &StationSelection::All, 2021..=2021, &config)
                .expect("query succeeds");
        assert_eq!(series.events.len(), 1);
        assert_eq!(series.events[0].annotation.name, "Strike");
        assert_eq!(series.events[0].sequence_index, 5);
    }

    #[test]
    fn test_unknown_station_is_empty() {
        let station = StationSelection::Station(String::from("Eilat"));
        let series = compute_ridership_series(&six_years(), &station, 2019..=2024)
            .expect("query succeeds");
        assert!(series.points.is_empty());
        assert!(series.events.is_empty());
    }

    #[test]
    fn test_inverted_year_range_fails() {
        let result = compute_ridership_series(&six_years(), &StationSelection::All, 2024..=2020);
        assert!(matches!(
            result,
            Err(QueryError::Filter(FilterError::InvalidRange { .. }))
        ));
    }
}
