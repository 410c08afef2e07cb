mod aggregate_ops;
mod group;

pub use aggregate_ops::{aggregate, group_sum, top_n, top_n_records};
pub use group::Group;
