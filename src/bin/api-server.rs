//! Trendkit API Server
//!
//! HTTP API server exposing the stock trend analysis endpoint plus health
//! check and metrics. Every request is computed from its own body, so the
//! service is stateless and can be horizontally scaled.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use trendkit::core::http::start_server;
use trendkit::{config, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = config::server_port();

    info!("Starting Trendkit API Server");
    info!(environment = %config::get_environment(), "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
