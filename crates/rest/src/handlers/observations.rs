//! Observation search and observation history endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use kauri_model::{ObservationHistoryEntry, PatientLabObservation};
use kauri_store::{filter, LabStore};
use serde::Deserialize;

use crate::error::RestResult;
use crate::handlers::parse_optional_date_param;
use crate::state::AppState;

/// Query parameters for the observation search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationParams {
    observation_text: Option<String>,
    practice_id: Option<i32>,
}

/// `GET /api/labtest/patient-observations/{patientId}?observationText=&practiceId=`
pub async fn patient_observations<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i32>,
    Query(params): Query<ObservationParams>,
) -> Json<Vec<PatientLabObservation>> {
    Json(
        state
            .store()
            .patient_observations(
                patient_id,
                params.observation_text.filter(|t| !t.trim().is_empty()),
                params.practice_id,
            )
            .await,
    )
}

/// Query parameters for the observation history endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    start_date: Option<String>,
    end_date: Option<String>,
    panel_type: Option<String>,
}

/// `GET /api/labtest/patient-observation-history/{patientId}?startDate=&endDate=&panelType=`
///
/// Fetches the full history for the patient and applies the optional date
/// and panel filters in memory.
pub async fn observation_history<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<i32>,
    Query(params): Query<HistoryParams>,
) -> RestResult<Json<Vec<ObservationHistoryEntry>>> {
    let start = parse_optional_date_param("startDate", params.start_date.as_deref())?;
    let end = parse_optional_date_param("endDate", params.end_date.as_deref())?;

    let entries = state.store().observation_history(patient_id).await;
    Ok(Json(filter::history_entries(
        entries,
        start,
        end,
        params.panel_type.as_deref().filter(|p| !p.trim().is_empty()),
    )))
}
