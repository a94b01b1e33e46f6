//! Reference-data search endpoints.
//!
//! Thin pass-throughs over [`crate::external::ExternalApiClient`]; upstream
//! failures already degrade to empty result sets inside the client, so the
//! only error these handlers raise is a blank query.

use axum::extract::{Query, State};
use axum::Json;
use kauri_model::{DiagnosisSearchResponse, MedicationSearchResponse};
use kauri_store::LabStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Query parameter for the diagnosis search.
#[derive(Debug, Deserialize)]
pub struct DiagnosisParams {
    query: Option<String>,
}

/// `GET /api/externalapi/diagnosis/search?query=`
pub async fn search_diagnosis<S: LabStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<DiagnosisParams>,
) -> RestResult<Json<DiagnosisSearchResponse>> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(RestError::bad_request("Query parameter is required"));
    }
    debug!(query, "searching diagnosis codes");
    Ok(Json(state.external().search_diagnosis(&query).await))
}

/// Query parameter for the medication search.
#[derive(Debug, Deserialize)]
pub struct MedicationParams {
    search: Option<String>,
}

/// `GET /api/externalapi/medication/search?search=`
pub async fn search_medication<S: LabStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<MedicationParams>,
) -> RestResult<Json<MedicationSearchResponse>> {
    let search = params.search.unwrap_or_default();
    if search.trim().is_empty() {
        return Err(RestError::bad_request("Search parameter is required"));
    }
    debug!(search, "searching medications");
    Ok(Json(state.external().search_medication(&search).await))
}
