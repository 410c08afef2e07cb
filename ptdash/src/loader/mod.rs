mod load_error;
mod table_cache;
mod table_loader;
mod table_source;

pub use load_error::LoadError;
pub use table_cache::{CacheState, TableCache};
pub use table_loader::{load_table, CsvTableLoader, TableLoader};
pub use table_source::TableSource;
