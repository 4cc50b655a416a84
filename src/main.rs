use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use rx_core::{CoreConfig, InteractionService};

/// Main entry point for the rx application
///
/// Starts both gRPC and REST servers concurrently over one shared interaction service:
/// - gRPC server on port 50051 (configurable via RX_ADDR)
/// - REST server on port 3000 (configurable via RX_REST_ADDR)
///
/// The gRPC server requires authentication via x-api-key header.
/// The REST server provides open access to the assessment endpoints.
///
/// # Environment Variables
/// - `RX_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `RX_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DRUG_SERVICE_URL`: Drug store base URL (default: seeded in-memory catalog)
/// - `INTERACTION_SERVICE_URL`: Remote interaction service used for prescriptions (optional)
/// - `RX_LOOKUP_TIMEOUT_SECS`: Per-request timeout for the HTTP collaborators (default: 5)
/// - `API_KEY`: API key for gRPC authentication
/// - `RX_ENABLE_REFLECTION`: Set to "true" to expose gRPC reflection
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If configuration, server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rx_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("api_grpc=info".parse()?)
                .add_directive("rx_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let grpc_addr: SocketAddr = std::env::var("RX_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:50051".into())
        .parse()?;
    let rest_addr = std::env::var("RX_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let api_key = std::env::var("API_KEY").unwrap_or_default();
    let enable_reflection =
        std::env::var("RX_ENABLE_REFLECTION").unwrap_or_else(|_| "false".to_string()) == "true";

    let cfg = CoreConfig::from_env_values(
        std::env::var("DRUG_SERVICE_URL").ok(),
        std::env::var("INTERACTION_SERVICE_URL").ok(),
        std::env::var("RX_LOOKUP_TIMEOUT_SECS").ok(),
    )?;
    // Blocking HTTP clients must be built off the async executor.
    let service =
        tokio::task::spawn_blocking(move || InteractionService::from_config(&cfg)).await??;

    if api_key.is_empty() {
        tracing::warn!("API_KEY is not set; every gRPC call will be rejected");
    }

    tracing::info!("++ Starting rx gRPC on {}", grpc_addr);
    tracing::info!("++ Starting rx REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    let rest_app = router(AppState {
        service: service.clone(),
    });
    let rest_server = async move { axum::serve(listener, rest_app).await };

    let grpc_server = api_grpc::serve(grpc_addr, service, api_key, enable_reflection);

    // Run both
    let (rest_result, grpc_result) = tokio::join!(rest_server, grpc_server);
    rest_result?;
    grpc_result?;

    Ok(())
}
