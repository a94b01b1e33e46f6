//! # kauri-store - Kauri Lab Gateway Storage Layer
//!
//! Dispatches every read operation of the gateway to a PostgreSQL stored
//! procedure or parameterized query and maps the resulting rows into the
//! [`kauri_model`] projection types.
//!
//! ## Architecture
//!
//! - [`row`] - The [`row::SqlRow`] abstraction over a tabular row and the
//!   tolerant value coercions (type drift between environments is expected,
//!   e.g. a column that is `int2` in one database and `varchar` in another).
//! - [`mapping`] - A single declarative row-to-record projector. Every row
//!   shape supplies a field-binding table (column name → setter → kind) and
//!   shares the same mapping loop; there is no per-entity column switch.
//! - [`bindings`] - The field-binding tables for each projection type.
//! - [`stream`] - The [`stream::ProcedureStream`] seam for procedures that
//!   return several ordered result sets.
//! - [`assemble`] - Walks a procedure stream into a
//!   [`kauri_model::PatientRecordBundle`], tolerating truncated streams and
//!   skipping individual malformed rows.
//! - [`store`] - The [`store::LabStore`] dispatch trait the REST layer is
//!   generic over.
//! - [`pg`] - The PostgreSQL backend: pooled connections
//!   (`deadpool-postgres`), a row adapter, a refcursor-based procedure
//!   stream, and the [`pg::PgLabStore`] implementation.
//! - [`filter`] - In-memory conjunctive predicates applied after a full
//!   fetch (the service does not push filter predicates into SQL).
//! - [`sample`] - The built-in fallback dataset served when the backing
//!   store is unreachable or empty.
//!
//! ## Failure policy
//!
//! Database failures never escape as panics. Depending on the operation
//! they degrade to an empty collection, `None`, or the sample dataset; a
//! single malformed row inside a result set is logged and dropped without
//! aborting the rest of the response.

pub mod assemble;
pub mod bindings;
pub mod error;
pub mod filter;
pub mod mapping;
pub mod pg;
pub mod procedures;
pub mod row;
pub mod sample;
pub mod store;
pub mod stream;

pub use error::{StoreError, StoreResult};
pub use filter::LabTestFilter;
pub use mapping::{map_row, map_rows, FieldBinding, FromRow, Setter};
pub use pg::{PgConfig, PgLabStore};
pub use row::{RowError, SqlRow, SqlValue};
pub use store::{LabStore, MedicationPage, PriorityBucket};
pub use stream::{BoxRow, ProcedureStream};
