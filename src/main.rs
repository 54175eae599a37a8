use std::sync::Arc;

use devops_info_service::{
    AppState, Config, ENDPOINTS, Result, StartupClock, SystemHostInfo, create_router,
};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Start time is captured before anything else
    let clock = StartupClock::new();

    let config = Config::from_env()?;

    setup_tracing(&config);

    tracing::info!("Debug mode: {}", config.debug);

    let state = Arc::new(AppState::new(clock, Arc::new(SystemHostInfo)));

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| {
            tracing::error!("Failed to bind {}:{}: {}", config.host, config.port, e);
            e
        })?;

    tracing::info!("DevOps Info Service starting on {}", listener.local_addr()?);
    tracing::info!("Endpoints:");
    for endpoint in ENDPOINTS {
        tracing::info!(
            "  - {} {} - {}",
            endpoint.method,
            endpoint.path,
            endpoint.description
        );
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
        tracing::info!("HTTP server shutting down");
    })
    .await
    .map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}

fn setup_tracing(config: &Config) {
    // RUST_LOG wins; otherwise DEBUG picks between "debug" and "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
