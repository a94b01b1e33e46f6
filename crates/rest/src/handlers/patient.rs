//! Per-patient endpoints: demographics, the aggregated record, and its
//! isolated allergy/diagnosis slices.

use axum::extract::{Path, Query, State};
use axum::Json;
use kauri_model::{LabTestRow, PatientAllergy, PatientDiagnosis, PatientInfo, PatientRecordBundle};
use kauri_store::LabStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// `GET /api/labtest/patient-info/{patientId}`
///
/// Demographic lookup; a missing patient is a 404, not an error.
pub async fn patient_info<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i64>,
) -> RestResult<Json<PatientInfo>> {
    match state.store().patient_info(patient_id).await {
        Some(info) => Ok(Json(info)),
        None => Err(RestError::not_found(format!(
            "Patient with ID {patient_id} not found"
        ))),
    }
}

/// `GET /api/labtest/patient-sp/{patientId}`
///
/// Flat procedure rows for one patient, decorated with demographics.
pub async fn patient_lab_tests<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i64>,
) -> Json<Vec<LabTestRow>> {
    debug!(patient_id, "processing per-patient lab test request");
    Json(state.store().patient_lab_tests(patient_id).await)
}

/// Query parameters for the aggregated patient record.
#[derive(Debug, Deserialize)]
pub struct RecordParams {
    /// Optional message-id filter, forwarded as the procedure's second
    /// positional parameter (NULL when absent).
    #[serde(rename = "labTestMshID")]
    lab_test_msh_id: Option<i64>,
}

/// `GET /api/labtest/patient-labtest-updated/{patientId}?labTestMshID=`
///
/// The aggregated four-result-set record. 404 only when the underlying
/// call failed; an empty bundle from a reachable store is a 200.
pub async fn patient_record<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i64>,
    Query(params): Query<RecordParams>,
) -> RestResult<Json<PatientRecordBundle>> {
    debug!(
        patient_id,
        lab_test_msh_id = ?params.lab_test_msh_id,
        "processing patient record request"
    );
    match state
        .store()
        .patient_record(patient_id, params.lab_test_msh_id)
        .await
    {
        Some(bundle) => Ok(Json(bundle)),
        None => Err(RestError::not_found(format!(
            "Patient lab test data for patient ID {patient_id} not found"
        ))),
    }
}

/// `GET /api/labtest/patient-allergies/{patientId}`
///
/// The allergy slice of the aggregated record call.
pub async fn patient_allergies<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i64>,
) -> Json<Vec<PatientAllergy>> {
    Json(state.store().patient_allergies(patient_id).await)
}

/// `GET /api/labtest/patient-diagnoses/{patientId}`
///
/// The diagnosis slice of the aggregated record call.
pub async fn patient_diagnoses<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i64>,
) -> Json<Vec<PatientDiagnosis>> {
    Json(state.store().patient_diagnoses(patient_id).await)
}
