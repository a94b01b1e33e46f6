//! Server configuration for the lab gateway HTTP API.
//!
//! Supports programmatic construction, command line arguments, and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LABGW_SERVER_PORT` | 5050 | Server port |
//! | `LABGW_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `LABGW_LOG_LEVEL` | info | Log level |
//! | `LABGW_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `LABGW_ENABLE_CORS` | true | Enable CORS |
//! | `LABGW_CORS_ORIGINS` | * | Allowed origins |
//! | `LABGW_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `LABGW_CORS_HEADERS` | Content-Type,Accept | Allowed headers |

use clap::Parser;

/// Configuration for the HTTP server.
///
/// Built once at process start and injected into the application state;
/// nothing reads configuration ambiently after startup.
#[derive(Debug, Clone, Parser)]
#[command(name = "labgw")]
#[command(about = "Kauri Lab Gateway HTTP API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "LABGW_SERVER_PORT", default_value = "5050")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "LABGW_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LABGW_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "LABGW_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "LABGW_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "LABGW_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all). The API is
    /// read-only, so the default only admits GET.
    #[arg(long, env = "LABGW_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "LABGW_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5050,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from environment variables, falling back to
    /// defaults without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(std::iter::empty::<String>()).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }
        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// A configuration suitable for tests: ephemeral port, short timeout,
    /// no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            ..Default::default()
        }
    }
}
