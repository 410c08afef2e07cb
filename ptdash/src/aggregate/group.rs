/// one bucket of a groupby-sum: the summed measure of all rows sharing `key`.
///
/// `first` is the earliest contributing row, used for attributes that are not
/// part of the key (such as the coordinates of a route).
#[derive(Clone, Debug, PartialEq)]
pub struct Group<'a, K, R> {
    pub key: K,
    pub total: u64,
    /// number of rows summed into this group
    pub rows: usize,
    pub first: &'a R,
}
