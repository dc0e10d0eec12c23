// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use veritas::config::{self, ConfigSource};
use veritas::engine;
use veritas::history::InMemoryHistory;
use veritas::server;

use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "veritas", about = "Heuristic misinformation classifier service")]
struct Cli {
    /// Path to the veritas.yaml config file
    #[arg(long, default_value = "veritas.yaml", env = "VERITAS_CONFIG")]
    config: String,

    /// Port to listen on
    #[arg(long, default_value_t = server::DEFAULT_PORT, env = "VERITAS_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let addr = SocketAddr::from((server::BIND_ADDR, cli.port));
    tracing::info!(%addr, "veritas starting");

    let source = config::FileSource::new(&cli.config);
    let config = match config::load_config(&source) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        origin = %source.origin(),
        version = %config.policy.version,
        environment = %config.runtime.environment,
        markers = config.policy.markers.len(),
        remote = config.runtime.remote.as_ref().map(|r| r.url.as_str()).unwrap_or("none"),
        history_capacity = config.runtime.history.capacity,
        contract_hash = %config.contract_hash,
        "config loaded"
    );

    let analyzer: Arc<dyn engine::Analyzer> = Arc::new(engine::build_analyzer(&config));
    let history = Arc::new(InMemoryHistory::new(config.runtime.history.capacity));

    let app = server::build_router(analyzer, history);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "veritas listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
