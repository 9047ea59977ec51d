//! Cities API server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ request id ─▶ trace span ─▶ timeout ─▶ metrics
//!                                                             │
//!                                                             ▼
//!                                                    ┌─────────────────┐
//!                                                    │     routing     │
//!                                                    └────────┬────────┘
//!                                                             ▼
//!                                                    ┌─────────────────┐
//!                          400 { "errors": ... } ◀───│   validation    │
//!                                                    └────────┬────────┘
//!                                                             ▼
//!   Client Response                                  ┌─────────────────┐
//!   ◀────────────────────────────────────────────────│ cities handlers │
//!                                                    └─────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cities_api::config::load_config;
use cities_api::lifecycle;
use cities_api::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "cities-api")]
#[command(about = "HTTP API for cities with request validation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file and PORT
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.bind)?;
    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }
    Ok(())
}
