use super::FilterError;
use crate::model::{ColumnDef, FieldValue};
use std::collections::HashSet;

/// a boolean test on one column of a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate<C> {
    /// the row's value must be a member of `values`. an empty set matches no rows.
    In { column: C, values: HashSet<FieldValue> },
    /// the row's numeric value must lie within `[lo, hi]`, inclusive.
    Range {
        column: C,
        lo: FieldValue,
        hi: FieldValue,
    },
}

impl<C: ColumnDef> Predicate<C> {
    pub fn is_in<I, V>(column: C, values: I) -> Predicate<C>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Predicate::In {
            column,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn equals<V: Into<FieldValue>>(column: C, value: V) -> Predicate<C> {
        Predicate::is_in(column, [value])
    }

    /// builds an inclusive range test. bounds are checked when the predicate
    /// is applied, see [`Predicate::validate`].
    pub fn range<V: Into<FieldValue>>(column: C, lo: V, hi: V) -> Predicate<C> {
        Predicate::Range {
            column,
            lo: lo.into(),
            hi: hi.into(),
        }
    }

    pub fn column(&self) -> C {
        match self {
            Predicate::In { column, .. } => *column,
            Predicate::Range { column, .. } => *column,
        }
    }

    /// confirms the predicate's values agree with its column type and that a
    /// range has `lo <= hi`. bounds are never swapped.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            Predicate::In { column, values } => {
                let expected = column.column_type();
                match values.iter().find(|v| v.column_type() != expected) {
                    None => Ok(()),
                    Some(value) => Err(FilterError::ColumnTypeMismatch {
                        column: column.to_string(),
                        expected,
                        found: value.column_type(),
                        value: value.to_string(),
                    }),
                }
            }
            Predicate::Range { column, lo, hi } => {
                if !column.column_type().is_numeric() {
                    return Err(FilterError::NonNumericRange(column.to_string()));
                }
                let (lo_num, hi_num) = match (lo.as_f64(), hi.as_f64()) {
                    (Some(l), Some(h)) => (l, h),
                    _ => {
                        let bad = if lo.as_f64().is_none() { lo } else { hi };
                        return Err(FilterError::ColumnTypeMismatch {
                            column: column.to_string(),
                            expected: column.column_type(),
                            found: bad.column_type(),
                            value: bad.to_string(),
                        });
                    }
                };
                // written so that NaN bounds are rejected too
                if lo_num <= hi_num {
                    Ok(())
                } else {
                    Err(FilterError::InvalidRange {
                        column: column.to_string(),
                        lo: lo.to_string(),
                        hi: hi.to_string(),
                    })
                }
            }
        }
    }

    /// tests a single value read from this predicate's column.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Predicate::In { values, .. } => values.contains(value),
            Predicate::Range { lo, hi, .. } => match (value.as_f64(), lo.as_f64(), hi.as_f64()) {
                (Some(v), Some(l), Some(h)) => l <= v && v <= h,
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::Predicate;
    use crate::filter::FilterError;
    use crate::model::{FieldValue, StatusColumn};

    #[test]
    fn test_range_is_inclusive() {
        let p = Predicate::range(StatusColumn::Month, 1u32, 3u32);
        assert!(p.matches(&FieldValue::from(1u32)));
        assert!(p.matches(&FieldValue::from(3u32)));
        assert!(!p.matches(&FieldValue::from(4u32)));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let p = Predicate::range(StatusColumn::Month, 5u32, 2u32);
        assert!(matches!(p.validate(), Err(FilterError::InvalidRange { .. })));
    }

    #[test]
    fn test_range_on_text_column() {
        let p = Predicate::range(StatusColumn::StationName, 1, 2);
        assert_eq!(
            p.validate(),
            Err(FilterError::NonNumericRange(String::from("station_name")))
        );
    }

    #[test]
    fn test_membership_type_mismatch() {
        let p = Predicate::equals(StatusColumn::Year, "2023");
        assert!(matches!(
            p.validate(),
            Err(FilterError::ColumnTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_membership_matches_nothing() {
        let p: Predicate<StatusColumn> =
            Predicate::is_in(StatusColumn::Year, Vec::<i32>::new());
        assert!(p.validate().is_ok());
        assert!(!p.matches(&FieldValue::from(2023)));
    }
}
