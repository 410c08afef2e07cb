mod filter_error;
mod filter_ops;
mod predicate;

pub use filter_error::FilterError;
pub use filter_ops::{check_selection_size, filter, matches_all};
pub use predicate::Predicate;
