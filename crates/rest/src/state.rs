//! Application state shared by all request handlers.

use std::sync::Arc;

use kauri_store::LabStore;

use crate::config::ServerConfig;
use crate::external::ExternalApiClient;

/// Shared state: the store, the outbound reference-data client, and the
/// server configuration.
///
/// Generic over the store type so tests can swap in a mock; see the route
/// tests in `tests/api_tests.rs`.
pub struct AppState<S> {
    store: Arc<S>,
    external: Arc<ExternalApiClient>,
    config: Arc<ServerConfig>,
}

// Derived Clone would demand S: Clone; the fields are all Arcs.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            external: Arc::clone(&self.external),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: LabStore> AppState<S> {
    /// Creates the state from its parts.
    pub fn new(store: Arc<S>, external: ExternalApiClient, config: ServerConfig) -> Self {
        Self {
            store,
            external: Arc::new(external),
            config: Arc::new(config),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The reference-data API client.
    pub fn external(&self) -> &ExternalApiClient {
        &self.external
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
