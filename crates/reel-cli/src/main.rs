//! `reel` binary: serve the in-memory movie catalog over HTTP.

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use reel_gateway::{run_catalog_gateway, CatalogGatewayConfig};

#[derive(Debug, Parser)]
#[command(name = "reel", about = "In-memory movie catalog REST service", version)]
struct Cli {
    #[arg(
        long,
        default_value = "127.0.0.1:3000",
        help = "Listen address in host:port format"
    )]
    bind: String,
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    run_catalog_gateway(CatalogGatewayConfig { bind: cli.bind }).await
}
