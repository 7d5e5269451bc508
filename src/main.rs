use anyhow::Context;
use dotenvy::dotenv;
use rollcall::logging::init_tracing;
use rollcall::metrics::{init_metrics, store_duration_histogram};
use rollcall::modules::students::service::StudentsStore;
use rollcall::router::init_router;
use rollcall::state::{AppState, build_store};
use rollcall_config::AppConfig;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.observability);

    let metrics = if config.observability.enabled {
        Some(init_metrics().context("Failed to install Prometheus recorder")?)
    } else {
        None
    };

    // Handle creation must follow recorder installation.
    let histogram = metrics.as_ref().map(|_| store_duration_histogram());
    let store = build_store(&config.fault, histogram);
    info!(chain = %store.describe(), "Roster store composed");

    let app = init_router(AppState::new(store), metrics);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("🚀 Server running on http://{}", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout))
        .await
        .context("Server error")?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("📥 Received Ctrl+C, shutting down"),
        () = terminate => info!("📥 Received SIGTERM, shutting down"),
    }

    // Force exit if draining outlasts the timeout.
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        error!("Graceful shutdown timed out after {:?}, exiting", timeout);
        std::process::exit(1);
    });
}
