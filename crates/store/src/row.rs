//! Row abstraction and tolerant value coercions.
//!
//! Stored-procedure result sets are not stable across environments: a column
//! declared `int2` in one database shows up as `numeric` or even `varchar`
//! in another, and column order changes between procedure versions. The
//! [`SqlRow`] trait therefore exposes columns by name and declared type, and
//! [`SqlValue`] carries the driver-decoded value; the coercions below narrow
//! or parse it into the target field kind. A value that cannot be coerced
//! becomes "no value" — a missing field is always preferred over a failed
//! request.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Error raised when a column value cannot be decoded from the driver.
///
/// This is a row-level error: callers mapping a multi-row result set catch
/// it per row and skip the offending record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// The driver failed to decode the column's wire value.
    #[error("column {column} ({type_name}): {message}")]
    Decode {
        /// Column name as reported by the result set.
        column: String,
        /// Declared database type name.
        type_name: String,
        /// Driver error text.
        message: String,
    },
}

/// A single driver-decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// `int2` / tinyint-like columns.
    SmallInt(i16),
    /// `int4` columns.
    Int(i32),
    /// `int8` columns.
    BigInt(i64),
    /// `numeric` / `decimal` columns.
    Numeric(Decimal),
    /// `float4` / `float8` columns.
    Float(f64),
    /// Boolean columns.
    Bool(bool),
    /// Character columns.
    Text(String),
    /// Timestamp and date columns.
    DateTime(NaiveDateTime),
    /// Binary payload columns.
    Bytes(Vec<u8>),
    /// `uuid` columns.
    Uuid(Uuid),
}

impl SqlValue {
    /// True for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Coerces into an `i64`, truncating wider numerics and parsing text.
    ///
    /// Text that does not parse as an integer yields `None` rather than an
    /// error, matching the mapper's missing-field-over-crashed-request
    /// policy.
    pub fn into_i64(self) -> Option<i64> {
        match self {
            SqlValue::SmallInt(v) => Some(i64::from(v)),
            SqlValue::Int(v) => Some(i64::from(v)),
            SqlValue::BigInt(v) => Some(v),
            SqlValue::Numeric(d) => d.trunc().to_i64(),
            SqlValue::Float(f) => Some(f as i64),
            SqlValue::Bool(b) => Some(i64::from(b)),
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerces into an `i32`; see [`SqlValue::into_i64`] for the policy.
    pub fn into_i32(self) -> Option<i32> {
        self.into_i64().map(|v| v as i32)
    }

    /// Coerces into a `u8`; see [`SqlValue::into_i64`] for the policy.
    pub fn into_u8(self) -> Option<u8> {
        self.into_i64().map(|v| v as u8)
    }

    /// Coerces into a `bool`.
    ///
    /// Accepts booleans, integers (non-zero is true), and parseable text
    /// ("true"/"false" or a number).
    pub fn into_bool(self) -> Option<bool> {
        match self {
            SqlValue::Bool(b) => Some(b),
            SqlValue::SmallInt(v) => Some(v != 0),
            SqlValue::Int(v) => Some(v != 0),
            SqlValue::BigInt(v) => Some(v != 0),
            SqlValue::Numeric(d) => Some(!d.is_zero()),
            SqlValue::Text(s) => {
                let s = s.trim();
                s.parse::<bool>()
                    .ok()
                    .or_else(|| s.parse::<i64>().ok().map(|v| v != 0))
            }
            _ => None,
        }
    }

    /// Coerces into a `String`, stringifying scalar values.
    ///
    /// Several legacy columns drifted between integer and character types
    /// (patient and practice identifiers in particular), so numeric values
    /// stringify rather than dropping out.
    pub fn into_string(self) -> Option<String> {
        match self {
            SqlValue::Text(s) => Some(s),
            SqlValue::SmallInt(v) => Some(v.to_string()),
            SqlValue::Int(v) => Some(v.to_string()),
            SqlValue::BigInt(v) => Some(v.to_string()),
            SqlValue::Numeric(d) => Some(d.to_string()),
            SqlValue::Float(f) => Some(f.to_string()),
            SqlValue::Bool(b) => Some(b.to_string()),
            SqlValue::Uuid(u) => Some(u.to_string()),
            _ => None,
        }
    }

    /// Coerces into a timestamp. Only genuine timestamp columns qualify.
    pub fn into_datetime(self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Coerces into a binary payload.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            SqlValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

/// Abstraction over one tabular row of a result set.
///
/// Implemented by the PostgreSQL adapter ([`crate::pg::PgSqlRow`]) and by
/// in-memory fakes in tests. Lookup is by case-insensitive column name —
/// column order and presence are not guaranteed stable across environments
/// or procedure versions.
pub trait SqlRow {
    /// Number of columns in the row.
    fn column_count(&self) -> usize;

    /// Column name at a position.
    fn column_name(&self, idx: usize) -> &str;

    /// Declared database type name at a position ("int4", "varchar", ...).
    fn type_name(&self, idx: usize) -> &str;

    /// Decodes the value at a position.
    fn value(&self, idx: usize) -> Result<SqlValue, RowError>;

    /// Finds a column by case-insensitive name.
    fn ordinal(&self, name: &str) -> Option<usize> {
        (0..self.column_count()).find(|&i| self.column_name(i).eq_ignore_ascii_case(name))
    }
}

impl<R: SqlRow + ?Sized> SqlRow for Box<R> {
    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, idx: usize) -> &str {
        (**self).column_name(idx)
    }

    fn type_name(&self, idx: usize) -> &str {
        (**self).type_name(idx)
    }

    fn value(&self, idx: usize) -> Result<SqlValue, RowError> {
        (**self).value(idx)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory rows for mapper and assembler tests.

    use super::*;

    /// A fake row: (name, declared type, value) triples.
    #[derive(Debug, Clone, Default)]
    pub struct FakeRow {
        columns: Vec<(String, String, Result<SqlValue, RowError>)>,
    }

    impl FakeRow {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, name: &str, type_name: &str, value: SqlValue) -> Self {
            self.columns
                .push((name.to_string(), type_name.to_string(), Ok(value)));
            self
        }

        /// A column whose decode fails, to exercise row-skip paths.
        pub fn with_poison(mut self, name: &str, type_name: &str) -> Self {
            self.columns.push((
                name.to_string(),
                type_name.to_string(),
                Err(RowError::Decode {
                    column: name.to_string(),
                    type_name: type_name.to_string(),
                    message: "simulated decode failure".to_string(),
                }),
            ));
            self
        }
    }

    impl SqlRow for FakeRow {
        fn column_count(&self) -> usize {
            self.columns.len()
        }

        fn column_name(&self, idx: usize) -> &str {
            &self.columns[idx].0
        }

        fn type_name(&self, idx: usize) -> &str {
            &self.columns[idx].1
        }

        fn value(&self, idx: usize) -> Result<SqlValue, RowError> {
            self.columns[idx].2.clone()
        }
    }
}
