//! Kauri Lab Gateway server.
//!
//! HTTP facade over the practice-management database's lab-test stored
//! procedures, with reference-data API pass-throughs.

use clap::Parser;
use kauri_rest::{create_app, init_logging, ServerConfig};
use kauri_store::{PgConfig, PgLabStore};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let pg_config = PgConfig::from_env();
    info!(
        port = config.port,
        host = %config.host,
        database = %pg_config.dbname,
        "starting Kauri Lab Gateway"
    );

    let store = PgLabStore::connect(pg_config)
        .await
        .map_err(|e| anyhow::anyhow!("failed to connect to the database: {}", e))?;

    let app = create_app(store, config.clone());
    serve(app, &config).await
}
