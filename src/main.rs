use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use food_valley_rs::{
    build_state, create_app, init_observability,
    observability::Metrics,
    repositories::StaticCatalogRepository,
    services::LogSubmissionRecorder,
    shutdown_observability, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Nothing is logged until the subscriber below is installed
    let config = Config::from_environment().context("failed to load configuration")?;
    init_observability(&config.observability).context("failed to initialize observability")?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        otlp = config.observability.otlp_endpoint.is_some(),
        "Configuration loaded"
    );
    debug!(?config, "Effective configuration");

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = Arc::new(Metrics::new().context("failed to register metrics")?);
    info!("Metrics initialized successfully");

    // An inconsistent catalog is a startup failure, never a runtime one
    let repository = StaticCatalogRepository::food_valley().context("invalid menu catalog")?;

    let state = build_state(
        Arc::new(repository),
        Arc::new(LogSubmissionRecorder::new()),
        metrics.clone(),
    );
    info!("Services initialized successfully");

    let app = create_app(state, metrics, &config.server).context("failed to build router")?;

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("invalid host address {}", config.server.host))?,
        config.server.port,
    );
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    let shutdown_signal = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("server error")?;

    shutdown_observability().await;
    info!("Server shutdown complete");
    Ok(())
}
