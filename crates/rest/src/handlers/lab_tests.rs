//! Lab-test collection endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use kauri_model::LabTestRow;
use kauri_store::{LabStore, LabTestFilter, PriorityBucket};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::handlers::{parse_date_param, parse_optional_date_param};
use crate::state::AppState;

/// `GET /api/labtest`
///
/// All lab rows. When the backing store is unreachable or empty this
/// returns the two built-in sample records rather than an error.
pub async fn all_lab_tests<S: LabStore>(State(state): State<AppState<S>>) -> Json<Vec<LabTestRow>> {
    debug!("processing get-all lab test request");
    Json(state.store().all_lab_tests().await)
}

/// `GET /api/labtest/patient/{patientId}`
///
/// Rows for one patient (string identifier) via the direct join query.
pub async fn lab_tests_by_patient<S: LabStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<String>,
) -> RestResult<Json<Vec<LabTestRow>>> {
    if patient_id.trim().is_empty() {
        return Err(RestError::bad_request("Patient ID is required"));
    }
    Ok(Json(state.store().lab_tests_by_patient(&patient_id).await))
}

/// Query parameters for the date-range endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// `GET /api/labtest/daterange?startDate=&endDate=`
///
/// Inclusive range over the message datetime; 400 when the start is after
/// the end or either bound is missing or malformed.
pub async fn lab_tests_by_date_range<S: LabStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<DateRangeParams>,
) -> RestResult<Json<Vec<LabTestRow>>> {
    let start = parse_date_param(
        "startDate",
        params
            .start_date
            .as_deref()
            .ok_or_else(|| RestError::bad_request("startDate is required"))?,
    )?;
    let end = parse_date_param(
        "endDate",
        params
            .end_date
            .as_deref()
            .ok_or_else(|| RestError::bad_request("endDate is required"))?,
    )?;
    if start > end {
        return Err(RestError::bad_request(
            "Start date must be before or equal to end date",
        ));
    }
    Ok(Json(state.store().lab_tests_by_date_range(start, end).await))
}

/// Query parameters for the conjunctive filter endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    patient_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    practice_id: Option<String>,
}

/// `GET /api/labtest/filter?patientId=&startDate=&endDate=&practiceId=`
///
/// Conjunctive optional predicates; absent parameters are skipped.
pub async fn lab_tests_filtered<S: LabStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<FilterParams>,
) -> RestResult<Json<Vec<LabTestRow>>> {
    let filter = LabTestFilter {
        patient_id: params.patient_id.filter(|p| !p.trim().is_empty()),
        start_date: parse_optional_date_param("startDate", params.start_date.as_deref())?,
        end_date: parse_optional_date_param("endDate", params.end_date.as_deref())?,
        practice_id: params.practice_id.filter(|p| !p.trim().is_empty()),
    };
    Ok(Json(state.store().lab_tests_filtered(&filter).await))
}

/// `GET /api/labtest/incomplete-high-priority`
pub async fn incomplete_high_priority<S: LabStore>(
    State(state): State<AppState<S>>,
) -> Json<Vec<LabTestRow>> {
    Json(state.store().priority_bucket(PriorityBucket::IncompleteHigh).await)
}

/// `GET /api/labtest/incomplete-low-priority`
pub async fn incomplete_low_priority<S: LabStore>(
    State(state): State<AppState<S>>,
) -> Json<Vec<LabTestRow>> {
    Json(state.store().priority_bucket(PriorityBucket::IncompleteLow).await)
}

/// `GET /api/labtest/complete-high-priority`
pub async fn complete_high_priority<S: LabStore>(
    State(state): State<AppState<S>>,
) -> Json<Vec<LabTestRow>> {
    Json(state.store().priority_bucket(PriorityBucket::CompleteHigh).await)
}

/// `GET /api/labtest/complete-low-priority`
pub async fn complete_low_priority<S: LabStore>(
    State(state): State<AppState<S>>,
) -> Json<Vec<LabTestRow>> {
    Json(state.store().priority_bucket(PriorityBucket::CompleteLow).await)
}
