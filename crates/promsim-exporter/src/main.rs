//! promsim exporter binary.
//!
//! Focus: serving loop & lifecycle
//! - Scrape endpoint: /metrics (Prometheus text exposition, version 0.0.4)
//! - One advance-then-encode turn per scrape, under the engine lock
//! - Graceful shutdown on interrupt, exit 0

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use promsim_core::error::Result;
use promsim_exporter::{app_state::AppState, cli::Options, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Invalid integers already exited through clap with a usage message.
    let opts = Options::parse();

    if let Err(e) = run(opts).await {
        tracing::error!(%e, "exporter failed");
        std::process::exit(1);
    }
}

async fn run(opts: Options) -> Result<()> {
    let state = AppState::new(opts)?;

    let listen = SocketAddr::from(([0, 0, 0, 0], state.opts().port));
    let app = router::build_router(state.clone());

    tracing::info!(%listen, gauges = state.opts().metrics, "promsim-exporter starting");
    tracing::info!(
        "scrape endpoint ready at http://localhost:{}/metrics",
        state.opts().port
    );
    tracing::info!(
        "built-in families: http_requests_total, process_cpu_seconds_total, \
         node_cpu_usage_percent, process_resident_memory_bytes, queue_depth, \
         active_connections, http_request_duration_seconds, synthetic_gauge_value"
    );

    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("interrupt received, shutting down");
}
