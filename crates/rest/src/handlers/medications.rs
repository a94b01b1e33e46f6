//! Paged medication list endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use kauri_model::PatientMedication;
use kauri_store::{LabStore, MedicationPage};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters with the documented defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationParams {
    #[serde(default = "default_practice_id")]
    practice_id: i32,
    #[serde(default = "default_practice_location_id")]
    practice_location_id: i32,
    #[serde(default = "default_page_no")]
    page_no: i32,
    #[serde(default = "default_page_size")]
    page_size: i32,
}

fn default_practice_id() -> i32 {
    127
}

fn default_practice_location_id() -> i32 {
    4
}

fn default_page_no() -> i32 {
    1
}

fn default_page_size() -> i32 {
    20
}

/// `GET /api/labtest/patient-medications/{patientId}?practiceId=&practiceLocationId=&pageNo=&pageSize=`
pub async fn patient_medications<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i32>,
    Query(params): Query<MedicationParams>,
) -> Json<Vec<PatientMedication>> {
    let page = MedicationPage {
        practice_id: params.practice_id,
        practice_location_id: params.practice_location_id,
        page_no: params.page_no,
        page_size: params.page_size,
    };
    Json(state.store().patient_medications(patient_id, page).await)
}
