//! Post search service entry point.
//!
//! Startup order: search store (health + schema) → Kafka consumer → HTTP
//! server. Any startup failure aborts the process. On SIGINT/SIGTERM the
//! HTTP server stops accepting new requests and drains, the consumer stops
//! fetching and finishes its in-flight message, and the broker connection is
//! closed before exit.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use search_service::{Dependencies, ServiceError, Settings};
use search_service_api::{ApiState, SearchService};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Search service failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServiceError> {
    info!("Search service starting");

    let settings = Settings::from_env();
    let deps = Dependencies::new(&settings).await?;

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    // Consumer loop runs independently of the request-handling pool; both
    // share the same store handle through the indexer.
    let consumer = deps.consumer.clone();
    let indexer = deps.indexer.clone();
    let consumer_shutdown = shutdown_tx.subscribe();
    let consumer_handle = tokio::spawn(async move {
        if let Err(e) = consumer.run(&indexer, consumer_shutdown).await {
            error!(error = %e, "Consumer error");
        }
    });
    info!("Kafka consumer for post events started");

    let state = ApiState {
        search: Arc::new(SearchService::new(deps.store.clone())),
    };
    let app = search_service_api::router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "Search service HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx.clone()))
        .await?;

    info!("HTTP server closed, waiting for consumer to drain");
    let _ = shutdown_tx.send(());
    let _ = consumer_handle.await;

    info!("Shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM, then broadcast shutdown so the consumer
/// drains while the HTTP server finishes in-flight requests.
async fn shutdown_signal(shutdown_tx: broadcast::Sender<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }

    let _ = shutdown_tx.send(());
}
