mod field_value;
mod record;
mod status_category;
mod status_record;
mod table;
mod trip_record;

pub use field_value::{ColumnType, FieldValue};
pub use record::{ColumnDef, Record};
pub use status_category::StatusCategory;
pub use status_record::{StatusColumn, StatusMeasure, StatusRecord};
pub use table::Table;
pub use trip_record::{TripColumn, TripMeasure, TripRecord};
