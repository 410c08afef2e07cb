use crate::{loader::LoadError, query::QueryError};

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error("{0}")]
    Configuration(String),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("failure writing output: {0}")]
    Output(String),
}
