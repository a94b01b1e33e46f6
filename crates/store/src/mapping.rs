//! Declarative row-to-record projection.
//!
//! The legacy service re-derived a name-to-setter switch statement for every
//! row shape it read. Here there is exactly one mapping loop: a projection
//! type implements [`FromRow`] by supplying a static table of
//! [`FieldBinding`]s, and [`map_row`] drives any shape through the same
//! case-insensitive lookup and coercion path.

use tracing::warn;

use crate::row::{RowError, SqlRow};

/// A typed setter for one target field.
///
/// The variant selects the coercion applied to the source column
/// (see [`crate::row::SqlValue`]); the function pointer writes the coerced
/// value into the record. Setters receive `None` for SQL NULL, absent
/// columns never invoke their setter at all.
pub enum Setter<T: 'static> {
    /// 32-bit integer target.
    I32(fn(&mut T, Option<i32>)),
    /// 64-bit integer target.
    I64(fn(&mut T, Option<i64>)),
    /// Byte target (narrow sequence-number columns).
    U8(fn(&mut T, Option<u8>)),
    /// Boolean target.
    Bool(fn(&mut T, Option<bool>)),
    /// Character target; scalar source values stringify.
    Text(fn(&mut T, Option<String>)),
    /// Timestamp target.
    DateTime(fn(&mut T, Option<chrono::NaiveDateTime>)),
    /// Binary payload target.
    Bytes(fn(&mut T, Option<Vec<u8>>)),
}

/// One column-to-field binding in a projection table.
pub struct FieldBinding<T: 'static> {
    /// Source column name, matched case-insensitively.
    pub column: &'static str,
    /// Setter invoked with the coerced value.
    pub setter: Setter<T>,
}

/// A record type that can be projected from a [`SqlRow`].
///
/// Implementations provide their binding table in [`crate::bindings`];
/// `Default` supplies the value of every field whose column is absent or
/// NULL.
pub trait FromRow: Default + Sized + 'static {
    /// The column-to-field binding table for this shape.
    fn bindings() -> &'static [FieldBinding<Self>];
}

/// Projects one row into a record.
///
/// Absent columns and SQL NULLs leave the target field at its default; a
/// value the coercion cannot represent becomes `None` for that field. The
/// only error is a driver-level decode failure, which callers treat as
/// "skip this row".
pub fn map_row<T: FromRow>(row: &dyn SqlRow) -> Result<T, RowError> {
    let mut record = T::default();
    for binding in T::bindings() {
        let Some(idx) = row.ordinal(binding.column) else {
            continue;
        };
        let value = row.value(idx)?;
        if value.is_null() {
            continue;
        }
        match binding.setter {
            Setter::I32(set) => set(&mut record, value.into_i32()),
            Setter::I64(set) => set(&mut record, value.into_i64()),
            Setter::U8(set) => set(&mut record, value.into_u8()),
            Setter::Bool(set) => set(&mut record, value.into_bool()),
            Setter::Text(set) => set(&mut record, value.into_string()),
            Setter::DateTime(set) => set(&mut record, value.into_datetime()),
            Setter::Bytes(set) => set(&mut record, value.into_bytes()),
        }
    }
    Ok(record)
}

/// Projects a result set, dropping rows that fail to map.
///
/// At most the malformed row is lost; every following row is still
/// processed. Skips are logged at warn level with the failing column.
pub fn map_rows<T: FromRow, R: SqlRow>(rows: &[R]) -> Vec<T> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match map_row::<T>(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(row = index, error = %err, "skipping unmappable row");
            }
        }
    }
    records
}
