//! Wellness Server
//!
//! Run with: cargo run --bin wellness
//!
//! # Configuration
//!
//! Config file (first found): `--config PATH`, `~/.config/wellness/config.toml`,
//! `/etc/wellness/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `WELLNESS_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WELLNESS_PORT`: Port to listen on (default: 8501)
//! - `WELLNESS_TITLE`: Page title (default: Wellness Web App)
//! - `WELLNESS_LOG_LEVEL`: Log level (default: info)
//! - `WELLNESS_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use clap::Parser;
use std::path::PathBuf;
use wellness::api::{serve, AppState};
use wellness::config::Config;

#[derive(Parser)]
#[command(name = "wellness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wellness hub web server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    wellness::logging::init(&config.logging)?;

    tracing::info!("Starting Wellness server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        title = %config.app.title,
        addr = %config.server.addr(),
        "Loaded configuration"
    );

    serve(AppState::new(config)).await?;

    tracing::info!("Wellness server stopped");
    Ok(())
}
