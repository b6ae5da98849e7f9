//! Fleet Readiness API Server
//!
//! Serves expansion readiness evaluations over HTTP, plus health and
//! Prometheus metrics endpoints. Holds no per-request state, so instances can
//! be scaled horizontally.

use dotenvy::dotenv;
use fleet_readiness::config;
use fleet_readiness::core::http::start_server;
use fleet_readiness::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::get_port();
    let env = config::get_environment();
    info!("Starting Fleet Readiness API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
