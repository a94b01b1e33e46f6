//! PostgreSQL connection configuration.

use deadpool_postgres::{Config, Pool, Runtime, SslMode};
use serde::{Deserialize, Serialize};
use tokio_postgres::NoTls;

use crate::error::{StoreError, StoreResult};

/// Configuration for the PostgreSQL backend.
///
/// Constructed programmatically, from [`PgConfig::from_env`], or
/// deserialized from a config file. Built once at process start and passed
/// by reference into the backend — there is no ambient global connection
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PgConfig {
    /// PostgreSQL host.
    #[serde(default = "default_host")]
    pub host: String,

    /// PostgreSQL port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name.
    #[serde(default = "default_dbname")]
    pub dbname: String,

    /// Database user.
    #[serde(default = "default_user")]
    pub user: String,

    /// Database password.
    #[serde(default)]
    pub password: Option<String>,

    /// SSL mode.
    #[serde(default)]
    pub ssl_mode: PgSslMode,

    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Statement timeout applied to the aggregated patient-record call, in
    /// milliseconds. This is the only operation with an explicit timeout.
    #[serde(default = "default_record_timeout_ms")]
    pub record_timeout_ms: u64,
}

/// SSL mode for PostgreSQL connections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PgSslMode {
    /// Disable SSL.
    Disable,
    /// Prefer SSL, but allow non-SSL.
    #[default]
    Prefer,
    /// Require SSL.
    Require,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_dbname() -> String {
    "pms_nz".to_string()
}

fn default_user() -> String {
    "pms_nz".to_string()
}

fn default_max_connections() -> usize {
    10
}

fn default_record_timeout_ms() -> u64 {
    300_000
}

impl Default for PgConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dbname: default_dbname(),
            user: default_user(),
            password: None,
            ssl_mode: PgSslMode::default(),
            max_connections: default_max_connections(),
            record_timeout_ms: default_record_timeout_ms(),
        }
    }
}

impl PgConfig {
    /// Creates a configuration from environment variables.
    ///
    /// Reads `LABGW_PG_HOST`, `LABGW_PG_PORT`, `LABGW_PG_DBNAME`,
    /// `LABGW_PG_USER`, `LABGW_PG_PASSWORD`, `LABGW_PG_MAX_CONNECTIONS`,
    /// and `LABGW_PG_RECORD_TIMEOUT_MS`, defaulting anything unset.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("LABGW_PG_HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("LABGW_PG_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            dbname: std::env::var("LABGW_PG_DBNAME").unwrap_or_else(|_| default_dbname()),
            user: std::env::var("LABGW_PG_USER").unwrap_or_else(|_| default_user()),
            password: std::env::var("LABGW_PG_PASSWORD").ok(),
            max_connections: std::env::var("LABGW_PG_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_max_connections),
            record_timeout_ms: std::env::var("LABGW_PG_RECORD_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_record_timeout_ms),
            ..Default::default()
        }
    }

    /// Builds the connection pool.
    pub fn create_pool(&self) -> StoreResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = self.password.clone();
        cfg.ssl_mode = Some(match self.ssl_mode {
            PgSslMode::Disable => SslMode::Disable,
            PgSslMode::Prefer => SslMode::Prefer,
            PgSslMode::Require => SslMode::Require,
        });

        cfg.builder(NoTls)
            .map_err(StoreError::connection)?
            .max_size(self.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(StoreError::connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PgConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.record_timeout_ms, 300_000);
    }

    #[test]
    fn test_roundtrips_through_serde() {
        let config = PgConfig {
            host: "db.internal".to_string(),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PgConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.host, "db.internal");
        assert_eq!(back.password.as_deref(), Some("secret"));
    }
}
