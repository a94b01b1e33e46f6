//! Refcursor-based result-set streaming.
//!
//! PostgreSQL expresses "a stored procedure that returns several result
//! sets" as a function returning `SETOF refcursor`. The call itself yields
//! the ordered cursor names; each cursor is then drained with `FETCH ALL`
//! inside the same transaction. Advancement through the cursors is exactly
//! the positional advancement through result sets the assembler expects.

use std::collections::VecDeque;

use async_trait::async_trait;
use deadpool_postgres::Transaction;
use tokio_postgres::types::ToSql;

use crate::error::StoreResult;
use crate::pg::row::PgSqlRow;
use crate::stream::{BoxRow, ProcedureStream};

/// A procedure stream over an open transaction.
///
/// The transaction must stay open for the lifetime of the stream — closing
/// it invalidates the cursors.
pub struct PgProcedureStream<'a> {
    tx: &'a Transaction<'a>,
    cursors: VecDeque<String>,
}

impl<'a> PgProcedureStream<'a> {
    /// Invokes a refcursor-returning function and captures its cursor
    /// names in order.
    pub async fn open(
        tx: &'a Transaction<'a>,
        call: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> StoreResult<PgProcedureStream<'a>> {
        let rows = tx.query(call, params).await?;
        let cursors = rows
            .iter()
            .map(|row| row.get::<usize, String>(0))
            .collect();
        Ok(Self { tx, cursors })
    }
}

#[async_trait]
impl ProcedureStream for PgProcedureStream<'_> {
    async fn next_result_set(&mut self) -> StoreResult<Option<Vec<BoxRow>>> {
        let Some(cursor) = self.cursors.pop_front() else {
            return Ok(None);
        };
        // FETCH takes no bind parameters; embedded quotes in the
        // server-generated cursor name are doubled before interpolation.
        let fetch = format!(r#"FETCH ALL FROM "{}""#, cursor.replace('"', "\"\""));
        let rows = self.tx.query(&fetch, &[]).await?;
        Ok(Some(
            rows.into_iter()
                .map(|row| Box::new(PgSqlRow::new(row)) as BoxRow)
                .collect(),
        ))
    }
}
