use crate::{derived::DerivationError, filter::FilterError};

/// failure of one of the dashboard views. a selection that matches no rows is
/// not a failure, the view returns an empty result instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Derivation(#[from] DerivationError),
}
