//! routedoc demo service.
//!
//! # Architecture Overview
//!
//! ```text
//!   app setup ──▶ DocRouter ──┬──▶ axum::Router ──────────────┐
//!                             │                               ▼
//!                             └──▶ RouteTree ──(frozen)──▶ GET /_docs
//!                                                             │
//!   Client ──▶ HttpServer (TraceLayer, TimeoutLayer) ─────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use routedoc::config::{load_config, AppConfig};
use routedoc::lifecycle::{ctrl_c, Shutdown};
use routedoc::observability::init_logging;
use routedoc::{app, HttpServer};

#[derive(Parser)]
#[command(name = "routedoc")]
#[command(about = "Demo service that documents its own routes", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.logging);
    tracing::info!("routedoc v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        docs_path = ?config.docs.served_path(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        ctrl_c().await;
        shutdown.trigger();
    });

    let app = app::build(&config.docs);
    HttpServer::new(config, app).run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
