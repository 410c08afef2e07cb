use super::Group;
use crate::model::{FieldValue, Record, Table};
use indexmap::{map::Entry, IndexMap};
use itertools::Itertools;
use std::hash::Hash;

/// sums `measure_fn` over the rows sharing each distinct `key_fn` value.
///
/// groups come back in order of first occurrence. keys without a row are
/// never produced, so there are no zero-filled groups. the sum of all group
/// totals equals the sum of the measure over the input, with each total
/// saturating at `u64::MAX`.
pub fn group_sum<'a, R, K, KF, MF>(
    rows: impl IntoIterator<Item = &'a R>,
    key_fn: KF,
    measure_fn: MF,
) -> Vec<Group<'a, K, R>>
where
    R: 'a,
    K: Eq + Hash,
    KF: Fn(&'a R) -> K,
    MF: Fn(&'a R) -> u64,
{
    let mut groups: IndexMap<K, (u64, usize, &'a R)> = IndexMap::new();
    for row in rows {
        let amount = measure_fn(row);
        match groups.entry(key_fn(row)) {
            Entry::Occupied(mut occupied) => {
                let (total, count, _) = occupied.get_mut();
                *total = total.saturating_add(amount);
                *count += 1;
            }
            Entry::Vacant(vacant) => {
                vacant.insert((amount, 1, row));
            }
        }
    }
    groups
        .into_iter()
        .map(|(key, (total, rows, first))| Group {
            key,
            total,
            rows,
            first,
        })
        .collect_vec()
}

/// groups a table by the values of `group_keys`, summing `measure`.
pub fn aggregate<'a, R: Record>(
    table: &'a Table<R>,
    group_keys: &[R::Column],
    measure: R::Measure,
) -> Vec<Group<'a, Vec<FieldValue>, R>> {
    group_sum(
        table.iter(),
        |row| group_keys.iter().map(|c| row.value(*c)).collect_vec(),
        |row| row.measure(measure),
    )
}

/// the `n` rows with the greatest measure, in descending order.
///
/// the sort is stable, so tied rows keep their input order. asking for more
/// rows than exist returns all of them.
pub fn top_n<T, F>(mut rows: Vec<T>, n: usize, measure: F) -> Vec<T>
where
    F: Fn(&T) -> u64,
{
    rows.sort_by(|a, b| measure(b).cmp(&measure(a)));
    rows.truncate(n);
    rows
}

/// [`top_n`] over the records of a table.
pub fn top_n_records<R: Record>(table: &Table<R>, n: usize, measure: R::Measure) -> Table<R> {
    Table::new(top_n(table.rows().to_vec(), n, |row| row.measure(measure)))
}
