mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use thingfetch_api::{ThingService, TransportConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "thingfetch")]
#[command(about = "Fetch things by identifier from a things API")]
struct Cli {
    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,

    /// Base URL of the things API (overrides THINGFETCH_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides THINGFETCH_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the value of a single thing
    Fetch(commands::fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("thingfetch=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TransportConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!("using things API at {}", config.base_url);

    let service = ThingService::from_config(&config)?;

    match &cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &service, cli.output).await?,
    }

    Ok(())
}
