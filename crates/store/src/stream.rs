//! The multi-result-set seam.
//!
//! A single stored-procedure invocation can return several ordered result
//! sets (the patient record call returns up to four). [`ProcedureStream`]
//! models positional advancement through that stream; the assembly logic in
//! [`crate::assemble`] is written against the trait so it works identically
//! over the PostgreSQL refcursor implementation and scripted fakes in tests.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::row::SqlRow;

/// An owned, type-erased row from a procedure result set.
pub type BoxRow = Box<dyn SqlRow + Send + Sync>;

/// Positional advancement through an ordered sequence of result sets.
#[async_trait]
pub trait ProcedureStream: Send {
    /// Fetches the next result set in order.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. Consumers must treat
    /// early exhaustion as "remaining sets are empty" — a procedure version
    /// that returns fewer sets than expected is not an error.
    async fn next_result_set(&mut self) -> StoreResult<Option<Vec<BoxRow>>>;

    /// Reads and discards the next result set.
    ///
    /// Used by the isolated slice readers that only want a later set; the
    /// rows are fetched and thrown away to keep the stream position moving.
    async fn discard_result_set(&mut self) -> StoreResult<bool> {
        Ok(self.next_result_set().await?.is_some())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted streams for assembler tests.

    use std::collections::VecDeque;

    use super::*;
    use crate::row::testing::FakeRow;

    /// A stream that serves pre-scripted result sets in order.
    #[derive(Default)]
    pub struct ScriptedStream {
        sets: VecDeque<Vec<FakeRow>>,
    }

    impl ScriptedStream {
        pub fn new(sets: Vec<Vec<FakeRow>>) -> Self {
            Self {
                sets: sets.into(),
            }
        }
    }

    #[async_trait]
    impl ProcedureStream for ScriptedStream {
        async fn next_result_set(&mut self) -> StoreResult<Option<Vec<BoxRow>>> {
            Ok(self.sets.pop_front().map(|rows| {
                rows.into_iter()
                    .map(|row| Box::new(row) as BoxRow)
                    .collect()
            }))
        }
    }
}
