//! Adapter from driver rows to the [`SqlRow`] abstraction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use tokio_postgres::types::FromSql;
use tokio_postgres::Row;
use uuid::Uuid;

use crate::row::{RowError, SqlRow, SqlValue};

/// One PostgreSQL result row.
///
/// Declared-type dispatch happens here: the column's reported type name
/// selects the decode, and the resulting [`SqlValue`] variant feeds the
/// tolerant coercions in [`crate::row`]. Columns of a type this adapter
/// does not know are decoded as text so that the string-parse fallback
/// still applies.
pub struct PgSqlRow {
    row: Row,
}

impl PgSqlRow {
    /// Wraps a driver row.
    pub fn new(row: Row) -> Self {
        Self { row }
    }

    fn decode<'a, T: FromSql<'a>>(&'a self, idx: usize) -> Result<Option<T>, RowError> {
        self.row
            .try_get::<usize, Option<T>>(idx)
            .map_err(|err| RowError::Decode {
                column: self.column_name(idx).to_string(),
                type_name: self.type_name(idx).to_string(),
                message: err.to_string(),
            })
    }
}

impl SqlRow for PgSqlRow {
    fn column_count(&self) -> usize {
        self.row.len()
    }

    fn column_name(&self, idx: usize) -> &str {
        self.row.columns()[idx].name()
    }

    fn type_name(&self, idx: usize) -> &str {
        self.row.columns()[idx].type_().name()
    }

    fn value(&self, idx: usize) -> Result<SqlValue, RowError> {
        let value = match self.type_name(idx) {
            "int2" => self.decode::<i16>(idx)?.map(SqlValue::SmallInt),
            "int4" => self.decode::<i32>(idx)?.map(SqlValue::Int),
            "int8" => self.decode::<i64>(idx)?.map(SqlValue::BigInt),
            "numeric" => self.decode::<Decimal>(idx)?.map(SqlValue::Numeric),
            "float4" => self
                .decode::<f32>(idx)?
                .map(|v| SqlValue::Float(f64::from(v))),
            "float8" => self.decode::<f64>(idx)?.map(SqlValue::Float),
            "bool" => self.decode::<bool>(idx)?.map(SqlValue::Bool),
            "timestamp" => self.decode::<NaiveDateTime>(idx)?.map(SqlValue::DateTime),
            "timestamptz" => self
                .decode::<DateTime<Utc>>(idx)?
                .map(|dt| SqlValue::DateTime(dt.naive_utc())),
            "date" => self
                .decode::<NaiveDate>(idx)?
                .map(|d| SqlValue::DateTime(d.and_time(NaiveTime::MIN))),
            "bytea" => self.decode::<Vec<u8>>(idx)?.map(SqlValue::Bytes),
            "uuid" => self.decode::<Uuid>(idx)?.map(SqlValue::Uuid),
            "text" | "varchar" | "bpchar" | "name" => {
                self.decode::<String>(idx)?.map(SqlValue::Text)
            }
            // Unknown declared type: decode as text and let the coercion
            // layer parse it into the target kind.
            _ => self.decode::<String>(idx)?.map(SqlValue::Text),
        };
        Ok(value.unwrap_or(SqlValue::Null))
    }
}
