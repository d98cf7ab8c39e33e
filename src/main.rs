//! Timer Ledger - A single-user stopwatch-style time tracking server
//!
//! This is the main entry point for the timer-ledger application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use timer_ledger::{
    config::Config,
    state::AppState,
    store::YamlFileStore,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("timer_ledger={},tower_http=info", config.log_level()))
        .init();

    info!("Starting timer-ledger server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, timer_name={}, data_file={}",
          config.host, config.port, config.timer_name, config.data_file.display());

    // Create application state
    let store = YamlFileStore::new(config.data_file.clone());
    let state = Arc::new(AppState::new(Box::new(store), config.timer_name.clone())?);

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /                   - Ledger page");
    info!("  GET  /state              - Entries, active timer and total");
    info!("  GET  /total              - Total tracked seconds");
    info!("  POST /start              - Start a timer");
    info!("  POST /pause              - Pause the running timer");
    info!("  POST /resume             - Resume the paused timer");
    info!("  POST /stop               - Stop the timer and record an entry");
    info!("  POST /update_description - Set an entry description");
    info!("  GET  /health             - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
