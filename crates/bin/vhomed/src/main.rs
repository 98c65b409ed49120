//! # vhomed — vhome daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Construct the in-memory house and seed it with the configured devices
//! - Construct the house service, injecting the house via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use vhome_adapter_http_axum::state::AppState;
use vhome_adapter_storage_memory::House;
use vhome_app::ports::DeviceRepository;
use vhome_app::services::house_service::HouseService;
use vhome_domain::dto::DeviceDto;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?,
        )
        .init();

    let bind_addr = config.bind_addr();

    // House
    let service = HouseService::new(House::new());
    seed(&service, config.house.devices).await?;

    // HTTP
    let state = AppState::new(service);
    let app = vhome_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "vhomed listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("vhomed stopped");
    Ok(())
}

/// Create every configured device through the regular creation path.
async fn seed<R>(service: &HouseService<R>, devices: Vec<DeviceDto>) -> anyhow::Result<()>
where
    R: DeviceRepository,
{
    for dto in devices {
        let label = dto.label().unwrap_or_default().to_string();
        service
            .create_device(dto.kind(), dto)
            .await
            .with_context(|| format!("failed to seed device {label:?}"))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
