//! PostgreSQL backend.
//!
//! - [`config`] - connection configuration (programmatic or environment)
//! - [`row`] - the [`crate::row::SqlRow`] adapter over driver rows
//! - [`stream`] - refcursor-based multi-result-set streaming
//! - [`store`] - the [`crate::store::LabStore`] implementation

pub mod config;
pub mod row;
pub mod store;
pub mod stream;

pub use config::{PgConfig, PgSslMode};
pub use row::PgSqlRow;
pub use store::PgLabStore;
pub use stream::PgProcedureStream;
