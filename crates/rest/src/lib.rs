//! # kauri-rest - Kauri Lab Gateway HTTP API
//!
//! The HTTP surface of the gateway: an Axum application over any
//! [`kauri_store::LabStore`] implementation, plus the pass-through clients
//! for the public reference-data APIs.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/labtest` | All lab rows (sample fallback) |
//! | GET | `/api/labtest/patient/{id}` | Rows for one patient (string id) |
//! | GET | `/api/labtest/patient-sp/{id}` | Procedure rows + demographics |
//! | GET | `/api/labtest/daterange` | Inclusive date-range filter |
//! | GET | `/api/labtest/filter` | Conjunctive optional predicates |
//! | GET | `/api/labtest/patient-info/{id}` | Demographics (404 if absent) |
//! | GET | `/api/labtest/patient-labtest-updated/{id}` | Aggregated record |
//! | GET | `/api/labtest/patient-allergies/{id}` | Allergy slice |
//! | GET | `/api/labtest/patient-diagnoses/{id}` | Diagnosis slice |
//! | GET | `/api/labtest/patient-observations/{id}` | Observation search |
//! | GET | `/api/labtest/patient-observation-history/{id}` | History |
//! | GET | `/api/labtest/patient-medications/{id}` | Paged medications |
//! | GET | `/api/labtest/referrals` | Referral inbox |
//! | GET | `/api/labtest/document/{key}` | Document content + text |
//! | GET | `/api/labtest/{in,}complete-{high,low}-priority` | Buckets |
//! | GET | `/api/externalapi/diagnosis/search` | ICD-10 lookup |
//! | GET | `/api/externalapi/medication/search` | RxNav lookup |
//! | GET | `/health` | Health check |
//!
//! ## Error contract
//!
//! Success is 200 with a JSON body; validation failures are 400 with
//! `{"error": message}`; absent single entities are 404; unexpected
//! failures are 500 with `{"error", "details"}` (see [`error`]).
//!
//! ## Modules
//!
//! - [`config`] - Server configuration (clap + environment)
//! - [`error`] - Error type and response mapping
//! - [`state`] - Application state
//! - [`external`] - Reference-data API clients and response parsing
//! - [`handlers`] - Request handlers per resource family
//! - [`routing`] - Route table

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use external::ExternalApiClient;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use kauri_store::LabStore;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the Axum application with the production reference-data client.
pub fn create_app<S>(store: S, config: ServerConfig) -> Router
where
    S: LabStore + 'static,
{
    create_app_with_client(store, ExternalApiClient::new(), config)
}

/// Creates the Axum application with an explicit reference-data client.
pub fn create_app_with_client<S>(
    store: S,
    external: ExternalApiClient,
    config: ServerConfig,
) -> Router
where
    S: LabStore + 'static,
{
    info!(backend = store.backend_name(), "creating lab gateway API");

    let state = AppState::new(Arc::new(store), external, config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber. Call once at startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kauri_rest={level},kauri_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
