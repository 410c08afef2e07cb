use super::{DerivationError, EventAnnotation, PeriodKey};

/// a row paired with its zero-based position in a time-ordered series.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequenced<T> {
    pub sequence_index: usize,
    pub row: T,
}

/// scales each row's measure into `[0, max_value_scale]` relative to the
/// largest measure among `rows`. the row holding the maximum is assigned
/// exactly `max_value_scale`. when every measure is zero, every value is zero.
///
/// # Errors
///
/// * `EmptyInput` when `rows` is empty, since there is no maximum to scale by
/// * `InvalidScale` when the scale is negative, infinite or NaN
pub fn normalize_width<T, F>(
    rows: &[T],
    measure: F,
    max_value_scale: f64,
) -> Result<Vec<f64>, DerivationError>
where
    F: Fn(&T) -> u64,
{
    if !max_value_scale.is_finite() || max_value_scale < 0.0 {
        return Err(DerivationError::InvalidScale(max_value_scale));
    }
    let max = rows
        .iter()
        .map(&measure)
        .max()
        .ok_or_else(|| DerivationError::EmptyInput(String::from("normalized width")))?;
    if max == 0 {
        return Ok(vec![0.0; rows.len()]);
    }
    let widths = rows
        .iter()
        .map(|row| measure(row) as f64 / max as f64 * max_value_scale)
        .collect();
    Ok(widths)
}

/// the "YYYY-MM" key of a calendar month.
pub fn build_period_key(year: i32, month: u32) -> Result<PeriodKey, DerivationError> {
    PeriodKey::new(year, month)
}

/// orders rows by (year, month) ascending and numbers them from zero. rows
/// sharing a (year, month) keep their input order.
pub fn assign_sequence<T, YF, MF>(mut rows: Vec<T>, year_fn: YF, month_fn: MF) -> Vec<Sequenced<T>>
where
    YF: Fn(&T) -> i32,
    MF: Fn(&T) -> u32,
{
    rows.sort_by_key(|row| (year_fn(row), month_fn(row)));
    rows.into_iter()
        .enumerate()
        .map(|(sequence_index, row)| Sequenced {
            sequence_index,
            row,
        })
        .collect()
}

/// finds the row for each event's period, returning its index into `rows`.
/// events whose period has no row are left out of the result, in the same
/// order as `events` otherwise.
pub fn event_markers<'e, T, F>(
    rows: &[T],
    period_key: F,
    events: &'e [EventAnnotation],
) -> Vec<(usize, &'e EventAnnotation)>
where
    F: Fn(&T) -> PeriodKey,
{
    events
        .iter()
        .filter_map(|event| match rows.iter().position(|r| period_key(r) == event.period) {
            Some(index) => Some((index, event)),
            None => {
                log::debug!(
                    "event '{}' at {} is outside of the series, omitted",
                    event.name,
                    event.period
                );
                None
            }
        })
        .collect()
}
