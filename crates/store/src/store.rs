//! The dispatch seam between the HTTP layer and the database.
//!
//! [`LabStore`] lists every read operation the gateway performs. The REST
//! handlers are generic over this trait, so route tests run against an
//! in-memory mock while production uses [`crate::pg::PgLabStore`].
//!
//! Failure policy per method is part of the contract (see crate docs):
//! collection-valued operations degrade to empty (or the sample dataset for
//! the get-all operation), single-entity lookups degrade to `None`, and
//! only the document lookup propagates its error to the caller.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use kauri_model::{
    DocumentRecord, LabTestRow, ObservationHistoryEntry, PatientAllergy, PatientDiagnosis,
    PatientInfo, PatientLabObservation, PatientMedication, PatientRecordBundle, ReferralRow,
};

use crate::error::StoreResult;
use crate::filter::{by_date_range, LabTestFilter};

/// Paging and practice scoping for the medication list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationPage {
    /// Practice scope.
    pub practice_id: i32,
    /// Practice location scope.
    pub practice_location_id: i32,
    /// 1-based page number.
    pub page_no: i32,
    /// Rows per page.
    pub page_size: i32,
}

impl Default for MedicationPage {
    fn default() -> Self {
        Self {
            practice_id: 127,
            practice_location_id: 4,
            page_no: 1,
            page_size: 20,
        }
    }
}

/// The four fixed priority/status buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBucket {
    /// Incomplete results with high priority.
    IncompleteHigh,
    /// Incomplete results with low priority.
    IncompleteLow,
    /// Complete results with high priority.
    CompleteHigh,
    /// Complete results with low priority.
    CompleteLow,
}

/// Every read operation of the lab gateway.
#[async_trait]
pub trait LabStore: Send + Sync {
    /// Short backend identifier for logs and health checks.
    fn backend_name(&self) -> &'static str;

    /// All lab rows. Falls back to the built-in sample dataset when the
    /// store is unreachable or returns nothing.
    async fn all_lab_tests(&self) -> Vec<LabTestRow>;

    /// Rows for one patient via the direct parameterized join query.
    async fn lab_tests_by_patient(&self, patient_id: &str) -> Vec<LabTestRow>;

    /// Inclusive date-range filter, derived in memory from the get-all
    /// dataset.
    async fn lab_tests_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<LabTestRow> {
        by_date_range(self.all_lab_tests().await, start, end)
    }

    /// Conjunctive optional-predicate filter, derived in memory from the
    /// get-all dataset.
    async fn lab_tests_filtered(&self, filter: &LabTestFilter) -> Vec<LabTestRow> {
        filter.apply(self.all_lab_tests().await)
    }

    /// Flat procedure rows for one patient, decorated with demographics.
    async fn patient_lab_tests(&self, patient_id: i64) -> Vec<LabTestRow>;

    /// Demographic lookup; `None` both for "no such patient" and for a
    /// failed call (the caller cannot distinguish, by design).
    async fn patient_info(&self, patient_id: i64) -> Option<PatientInfo>;

    /// The aggregated four-result-set patient record. `None` only when the
    /// procedure call itself failed; an all-empty bundle from a reachable
    /// store is returned as-is.
    async fn patient_record(
        &self,
        patient_id: i64,
        lab_test_msh_id: Option<i64>,
    ) -> Option<PatientRecordBundle>;

    /// The allergy slice of the patient record call.
    async fn patient_allergies(&self, patient_id: i64) -> Vec<PatientAllergy>;

    /// The diagnosis slice of the patient record call.
    async fn patient_diagnoses(&self, patient_id: i64) -> Vec<PatientDiagnosis>;

    /// Grouped observation search.
    async fn patient_observations(
        &self,
        patient_id: i32,
        observation_text: Option<String>,
        practice_id: Option<i32>,
    ) -> Vec<PatientLabObservation>;

    /// Unfiltered observation history for one patient; callers apply the
    /// in-memory date and panel filters.
    async fn observation_history(&self, patient_id: i32) -> Vec<ObservationHistoryEntry>;

    /// Paged medication list.
    async fn patient_medications(
        &self,
        patient_id: i32,
        page: MedicationPage,
    ) -> Vec<PatientMedication>;

    /// Referral inbox rows.
    async fn referrals(&self) -> Vec<ReferralRow>;

    /// Document lookup by key and practice. Unlike the other operations
    /// this propagates failures, which surface as a 500 to the caller.
    async fn document_by_key(
        &self,
        document_key: &str,
        practice_id: i32,
    ) -> StoreResult<Vec<DocumentRecord>>;

    /// One of the four fixed priority/status bucket queries.
    async fn priority_bucket(&self, bucket: PriorityBucket) -> Vec<LabTestRow>;
}
