//! Referral inbox endpoint.

use axum::extract::State;
use axum::Json;
use kauri_model::ReferralRow;
use kauri_store::LabStore;

use crate::state::AppState;

/// `GET /api/labtest/referrals`
pub async fn referrals<S: LabStore>(State(state): State<AppState<S>>) -> Json<Vec<ReferralRow>> {
    Json(state.store().referrals().await)
}
