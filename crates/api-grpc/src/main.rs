//! Standalone gRPC API server binary.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rx_core::{CoreConfig, InteractionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_grpc=info".parse()?)
                .add_directive("rx_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("RX_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:50051".into())
        .parse()?;
    let api_key = std::env::var("API_KEY").unwrap_or_default();
    let enable_reflection =
        std::env::var("RX_ENABLE_REFLECTION").unwrap_or_else(|_| "false".to_string()) == "true";

    let cfg = CoreConfig::from_env_values(
        std::env::var("DRUG_SERVICE_URL").ok(),
        std::env::var("INTERACTION_SERVICE_URL").ok(),
        std::env::var("RX_LOOKUP_TIMEOUT_SECS").ok(),
    )?;
    let service =
        tokio::task::spawn_blocking(move || InteractionService::from_config(&cfg)).await??;

    if api_key.is_empty() {
        tracing::warn!("API_KEY is not set; every gRPC call will be rejected");
    }

    tracing::info!("-- Starting rx gRPC on {}", addr);

    api_grpc::serve(addr, service, api_key, enable_reflection).await
}
