use super::{ColumnType, FieldValue};
use std::{fmt::Debug, fmt::Display, hash::Hash};

/// a named, typed column of some record type.
pub trait ColumnDef: Copy + Debug + Display + Eq + Hash {
    fn column_type(&self) -> ColumnType;
}

/// a row of a typed table. columns are addressed through the record's own
/// column enum instead of by string name.
pub trait Record: Clone {
    type Column: ColumnDef;
    /// the non-negative numeric fields that can be summed and ranked.
    type Measure: Copy + Debug;

    fn value(&self, column: Self::Column) -> FieldValue;

    fn measure(&self, measure: Self::Measure) -> u64;

    /// checks row invariants that deserialization alone cannot express.
    /// called once per row when a table is loaded.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
