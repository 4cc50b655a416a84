//! # API gRPC
//!
//! gRPC server implementation for rx.
//!
//! Handles:
//! - gRPC service setup and API key authentication
//! - Service implementations using `rx-core` for interaction assessment
//! - gRPC-specific concerns (interceptors, tonic integration, reflection)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{api_key_interceptor, pb, InteractionsService};

pub mod service;

use api_shared::FILE_DESCRIPTOR_SET;
use pb::interactions_server::InteractionsServer;
use std::net::SocketAddr;
use tonic::transport::Server;

/// Serves the gRPC API until the server fails.
///
/// Every call is checked against `api_key`. Reflection is registered when `enable_reflection`
/// is set.
///
/// # Errors
/// Returns an error if the reflection service cannot be built or the transport fails.
pub async fn serve(
    addr: SocketAddr,
    service: rx_core::InteractionService,
    api_key: String,
    enable_reflection: bool,
) -> anyhow::Result<()> {
    let interactions = InteractionsServer::with_interceptor(
        InteractionsService::new(service),
        api_key_interceptor(api_key),
    );

    let reflection = if enable_reflection {
        tracing::info!("gRPC server reflection enabled");
        Some(
            tonic_reflection::server::Builder::configure()
                .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
                .build_v1()?,
        )
    } else {
        tracing::info!("gRPC server reflection disabled");
        None
    };

    Server::builder()
        .add_service(interactions)
        .add_optional_service(reflection)
        .serve(addr)
        .await?;

    Ok(())
}
