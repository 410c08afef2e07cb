use crate::model::ColumnType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid range for column '{column}': lower bound {lo} is greater than upper bound {hi}")]
    InvalidRange {
        column: String,
        lo: String,
        hi: String,
    },
    #[error("column '{column}' has type {expected} but predicate value {value} has type {found}")]
    ColumnTypeMismatch {
        column: String,
        expected: ColumnType,
        found: ColumnType,
        value: String,
    },
    #[error("range predicate requires a numeric column, but '{0}' is text")]
    NonNumericRange(String),
    #[error("selection for '{column}' has {count} values, at most {limit} are allowed")]
    SelectionTooLarge {
        column: String,
        count: usize,
        limit: usize,
    },
}
