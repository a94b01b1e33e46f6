//! Route configuration.

use axum::routing::get;
use axum::Router;
use kauri_store::LabStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all gateway routes.
///
/// # Routes
///
/// ## Lab tests
/// - `GET /api/labtest` - all rows (sample fallback)
/// - `GET /api/labtest/patient/{patientId}` - by string patient id
/// - `GET /api/labtest/patient-sp/{patientId}` - per-patient procedure rows
/// - `GET /api/labtest/daterange` - inclusive date range
/// - `GET /api/labtest/filter` - conjunctive optional predicates
/// - `GET /api/labtest/incomplete-high-priority` (and the three sibling
///   buckets) - fixed priority/status queries
///
/// ## Patient record
/// - `GET /api/labtest/patient-info/{patientId}`
/// - `GET /api/labtest/patient-labtest-updated/{patientId}`
/// - `GET /api/labtest/patientinboxdetail/{patientId}` (legacy alias)
/// - `GET /api/labtest/patient-allergies/{patientId}`
/// - `GET /api/labtest/patient-diagnoses/{patientId}`
///
/// ## Observations, medications, referrals, documents
/// - `GET /api/labtest/patient-observations/{patientId}`
/// - `GET /api/labtest/patient-observation-history/{patientId}`
/// - `GET /api/labtest/patient-medications/{patientId}`
/// - `GET /api/labtest/referrals`
/// - `GET /api/labtest/document/{documentKey}`
///
/// ## Reference data
/// - `GET /api/externalapi/diagnosis/search`
/// - `GET /api/externalapi/medication/search`
///
/// ## Operational
/// - `GET /health`
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: LabStore + 'static,
{
    Router::new()
        .route("/api/labtest", get(handlers::lab_tests::all_lab_tests::<S>))
        .route(
            "/api/labtest/patient/{patient_id}",
            get(handlers::lab_tests::lab_tests_by_patient::<S>),
        )
        .route(
            "/api/labtest/patient-sp/{patient_id}",
            get(handlers::patient::patient_lab_tests::<S>),
        )
        .route(
            "/api/labtest/daterange",
            get(handlers::lab_tests::lab_tests_by_date_range::<S>),
        )
        .route(
            "/api/labtest/filter",
            get(handlers::lab_tests::lab_tests_filtered::<S>),
        )
        .route(
            "/api/labtest/patient-info/{patient_id}",
            get(handlers::patient::patient_info::<S>),
        )
        .route(
            "/api/labtest/patient-labtest-updated/{patient_id}",
            get(handlers::patient::patient_record::<S>),
        )
        .route(
            "/api/labtest/patientinboxdetail/{patient_id}",
            get(handlers::patient::patient_record::<S>),
        )
        .route(
            "/api/labtest/patient-allergies/{patient_id}",
            get(handlers::patient::patient_allergies::<S>),
        )
        .route(
            "/api/labtest/patient-diagnoses/{patient_id}",
            get(handlers::patient::patient_diagnoses::<S>),
        )
        .route(
            "/api/labtest/patient-observations/{patient_id}",
            get(handlers::observations::patient_observations::<S>),
        )
        .route(
            "/api/labtest/patient-observation-history/{patient_id}",
            get(handlers::observations::observation_history::<S>),
        )
        .route(
            "/api/labtest/patient-medications/{patient_id}",
            get(handlers::medications::patient_medications::<S>),
        )
        .route(
            "/api/labtest/referrals",
            get(handlers::referrals::referrals::<S>),
        )
        .route(
            "/api/labtest/document/{document_key}",
            get(handlers::documents::document_by_key::<S>),
        )
        .route(
            "/api/labtest/incomplete-high-priority",
            get(handlers::lab_tests::incomplete_high_priority::<S>),
        )
        .route(
            "/api/labtest/incomplete-low-priority",
            get(handlers::lab_tests::incomplete_low_priority::<S>),
        )
        .route(
            "/api/labtest/complete-high-priority",
            get(handlers::lab_tests::complete_high_priority::<S>),
        )
        .route(
            "/api/labtest/complete-low-priority",
            get(handlers::lab_tests::complete_low_priority::<S>),
        )
        .route(
            "/api/externalapi/diagnosis/search",
            get(handlers::external::search_diagnosis::<S>),
        )
        .route(
            "/api/externalapi/medication/search",
            get(handlers::external::search_medication::<S>),
        )
        .route("/health", get(handlers::health::health::<S>))
        .with_state(state)
}
