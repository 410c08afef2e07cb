#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DerivationError {
    #[error("cannot derive {0} from an empty set of rows")]
    EmptyInput(String),
    #[error("month {month} of year {year} is outside of [1, 12]")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid period key '{0}', expected YYYY-MM")]
    InvalidPeriod(String),
    #[error("normalization scale must be a finite, non-negative number, found {0}")]
    InvalidScale(f64),
}
