//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging when you only want the REST server (with
//! OpenAPI/Swagger UI). The workspace's main `rx-run` binary runs both gRPC and REST concurrently.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use rx_core::{CoreConfig, InteractionService};

/// Main entry point for the rx REST API server
///
/// # Environment Variables
/// - `RX_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `DRUG_SERVICE_URL`: Drug store base URL (default: seeded in-memory catalog)
/// - `INTERACTION_SERVICE_URL`: Remote interaction service used for prescriptions (optional)
/// - `RX_LOOKUP_TIMEOUT_SECS`: Per-request timeout for the HTTP collaborators (default: 5)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("rx_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RX_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("DRUG_SERVICE_URL").ok(),
        std::env::var("INTERACTION_SERVICE_URL").ok(),
        std::env::var("RX_LOOKUP_TIMEOUT_SECS").ok(),
    )?;
    // Blocking HTTP clients must be built off the async executor.
    let service =
        tokio::task::spawn_blocking(move || InteractionService::from_config(&cfg)).await??;

    tracing::info!("-- Starting rx REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(AppState { service })).await?;

    Ok(())
}
