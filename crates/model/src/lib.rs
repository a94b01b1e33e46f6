//! # kauri-model - Kauri Lab Gateway Data Model
//!
//! Read-only projection types shared by the storage layer and the REST API.
//!
//! Every type in this crate is a transient, per-request projection over
//! relational rows: constructed when a result row is read, serialized into a
//! JSON response, and discarded. Nothing here has a write path.
//!
//! ## Wire format
//!
//! Field names serialize in the exact casing the legacy API exposed
//! (`labTestMshID`, `nhiNumber`, ...), so existing callers see an unchanged
//! response shape. Structs use `rename_all = "camelCase"` with explicit
//! renames for the acronym-bearing identifiers the camel-case policy would
//! otherwise mangle.
//!
//! ## Modules
//!
//! - [`lab`] - Flat lab-test result rows (message → order → observation → note)
//! - [`patient`] - Patient demographic snapshot
//! - [`record`] - The aggregated patient record bundle and its slices
//! - [`observation`] - Observation search results and observation history
//! - [`medication`] - Paged medication list entries
//! - [`referral`] - Referral inbox rows
//! - [`document`] - Stored documents and extracted content
//! - [`external`] - Reference-data search payloads (ICD-10, medications)

pub mod document;
pub mod external;
pub mod lab;
pub mod medication;
pub mod observation;
pub mod patient;
pub mod record;
pub mod referral;

pub use document::{DocumentContent, DocumentRecord};
pub use external::{
    DiagnosisHit, DiagnosisSearchResponse, MedicationHit, MedicationSearchResponse,
};
pub use lab::LabTestRow;
pub use medication::PatientMedication;
pub use observation::{ObservationHistoryEntry, PatientLabObservation};
pub use patient::PatientInfo;
pub use record::{
    PatientAllergy, PatientDiagnosis, PatientLabTestDetail, PatientRecordBundle,
    PatientRecordHeader,
};
pub use referral::ReferralRow;
