//! Local web action runtime for the export action.

pub mod routes;

pub use routes::{build_router, AppState, EXPORT_ROUTE};

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::OffersConfig;
use crate::core::action::ExportAction;

/// Serve the export action on `[server] host:port`.
///
/// Runs until Ctrl+C or SIGTERM, then drains in-flight requests.
pub async fn run_server(config: &OffersConfig) -> anyhow::Result<()> {
    let action = ExportAction::from_config(&config.target)?;
    let app = build_router(Arc::new(AppState { action }));

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;

    tracing::info!(address = %addr, route = EXPORT_ROUTE, "Export action listening");
    println!("Export action running at: http://{addr}{EXPORT_ROUTE}");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for the shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT (Ctrl+C), shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
