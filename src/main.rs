use clap::Parser;
use diffd::config::{Cli, Config};
use std::env::var;
use tracing::info;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing()?;

    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    info!("diffd v{}", diffd::VERSION);
    diffd::server::serve(config).await?;

    Ok(())
}

fn setup_tracing() -> anyhow::Result<()> {
    registry()
        .with(EnvFilter::builder().parse(format!(
            "diffd=info,{}",
            var("RUST_LOG").unwrap_or_default()
        ))?)
        .with(layer())
        .init();

    Ok(())
}
