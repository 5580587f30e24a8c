//! Showcase Mock API Server
//!
//! Run with: cargo run --bin showcase-mock-api
//!
//! Serves a fixed employee collection at `/users` so the employee portal can
//! be developed offline. Point the portal at it with
//! `SHOWCASE_EMPLOYEES_URL=http://127.0.0.1:8090/users`.
//!
//! # Configuration
//!
//! - `--config PATH` or the default config locations
//! - `SHOWCASE_MOCK_HOST`, `SHOWCASE_MOCK_PORT`: bind address
//! - `RUST_LOG`: log filter

use clap::Parser;
use std::path::PathBuf;

use showcase::config::Config;

#[derive(Parser)]
#[command(name = "showcase-mock-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline stand-in for the placeholder employee API")]
struct Args {
    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.mock_api.port = port;
    }

    showcase::telemetry::init_logging(&config.logging);
    tracing::info!("Starting showcase mock API v{}", env!("CARGO_PKG_VERSION"));

    showcase::mock_api::serve(&config.mock_api).await?;
    Ok(())
}
