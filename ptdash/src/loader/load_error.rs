#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("table source not found: {0}")]
    SourceNotFound(String),
    #[error("table source '{0}' contains no partitions")]
    EmptySource(String),
    #[error("failure reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed input in '{path}' at record {row}: {source}")]
    Malformed {
        path: String,
        row: usize,
        source: csv::Error,
    },
    #[error("partition '{path}' has header [{found}] but expected [{expected}]")]
    SchemaMismatch {
        path: String,
        expected: String,
        found: String,
    },
    #[error("invalid record in '{path}' at record {row}: {message}")]
    InvalidRecord {
        path: String,
        row: usize,
        message: String,
    },
    #[error("error building progress bar: {0}")]
    ProgressBar(String),
}
