use super::{FilterError, Predicate};
use crate::model::{Record, Table};
use std::fmt::Display;

/// returns the rows of `table` matching every predicate, in their input
/// order. no predicates returns every row.
///
/// predicates are validated before any row is read, so an invalid predicate
/// fails even when the table is empty. a membership value that never occurs
/// in the table is not an error, it simply produces an empty result.
pub fn filter<R: Record>(
    table: &Table<R>,
    predicates: &[Predicate<R::Column>],
) -> Result<Table<R>, FilterError> {
    for predicate in predicates.iter() {
        predicate.validate()?;
    }
    let filtered: Table<R> = table
        .iter()
        .filter(|row| matches_all(*row, predicates))
        .cloned()
        .collect();
    log::debug!(
        "filter with {} predicates kept {} of {} rows",
        predicates.len(),
        filtered.len(),
        table.len()
    );
    Ok(filtered)
}

/// logical AND of the predicates against a single row.
pub fn matches_all<R: Record>(row: &R, predicates: &[Predicate<R::Column>]) -> bool {
    predicates
        .iter()
        .all(|predicate| predicate.matches(&row.value(predicate.column())))
}

/// rejects a selection with more than `limit` values.
pub fn check_selection_size<C: Display>(
    column: C,
    count: usize,
    limit: usize,
) -> Result<(), FilterError> {
    if count > limit {
        Err(FilterError::SelectionTooLarge {
            column: column.to_string(),
            count,
            limit,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{check_selection_size, filter};
    use crate::filter::{FilterError, Predicate};
    use crate::model::{StatusCategory, StatusColumn, StatusRecord, Table};

    fn row(year: i32, month: u32, station: &str, count: u64) -> StatusRecord {
        StatusRecord {
            year,
            month,
            station_name: String::from(station),
            status_category: StatusCategory::OnTime,
            status_count: count,
        }
    }

    fn table() -> Table<StatusRecord> {
        Table::new(vec![
            row(2022, 1, "Haifa Center", 3),
            row(2023, 1, "Haifa Center", 5),
            row(2023, 4, "Haifa Center", 7),
            row(2023, 2, "Sderot", 11),
            row(2024, 2, "Sderot", 13),
        ])
    }

    #[test]
    fn test_no_predicates_is_identity() {
        let t = table();
        assert_eq!(filter(&t, &[]).expect("valid"), t);
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let predicates = [
            Predicate::equals(StatusColumn::Year, 2023),
            Predicate::is_in(StatusColumn::StationName, ["Haifa Center"]),
            Predicate::range(StatusColumn::Month, 1u32, 3u32),
        ];
        let result = filter(&table(), &predicates).expect("valid");
        assert_eq!(result.rows(), &[row(2023, 1, "Haifa Center", 5)]);
    }

    #[test]
    fn test_absent_value_yields_empty_result() {
        let predicates = [Predicate::equals(StatusColumn::StationName, "Eilat")];
        let result = filter(&table(), &predicates).expect("absent values are not errors");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_selection_yields_empty_result() {
        let predicates = [Predicate::is_in(StatusColumn::Year, Vec::<i32>::new())];
        let result = filter(&table(), &predicates).expect("empty selections are not errors");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let empty: Table<StatusRecord> = Table::default();
        let predicates = [Predicate::equals(StatusColumn::Year, 2023)];
        assert!(filter(&empty, &predicates).expect("valid").is_empty());
    }

    #[test]
    fn test_inverted_range_fails_even_on_empty_table() {
        let empty: Table<StatusRecord> = Table::default();
        let predicates = [Predicate::range(StatusColumn::Year, 2024, 2020)];
        assert!(matches!(
            filter(&empty, &predicates),
            Err(FilterError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let predicates = [
            Predicate::range(StatusColumn::Year, 2023, 2024),
            Predicate::equals(StatusColumn::StationName, "Sderot"),
        ];
        let once = filter(&table(), &predicates).expect("valid");
        let twice = filter(&once, &predicates).expect("valid");
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_selection_size_limit() {
        assert!(check_selection_size(StatusColumn::StationName, 20, 20).is_ok());
        assert_eq!(
            check_selection_size(StatusColumn::StationName, 21, 20),
            Err(FilterError::SelectionTooLarge {
                column: String::from("station_name"),
                count: 21,
                limit: 20
            })
        );
    }
}
