mod api;

use anyhow::Result;
use api::{Api, Handler};
use clap::Parser;
use gridbot_gateway::{Session, SimArgs, subjects::DEFAULT_PREFIX};
use tracing::info;

/// Default NATS server URL.
const DEFAULT_NATS_URL: &str = "nats://127.0.0.1:4222";

#[derive(Parser)]
#[command(name = "gridbot_server", about = "Grid robot simulator API over NATS")]
struct Args {
    /// NATS server URL
    #[arg(short, long, env = "NATS_URL", default_value = DEFAULT_NATS_URL)]
    nats_url: String,

    /// NATS subject prefix
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[command(flatten)]
    sim: SimArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let config = args.sim.config()?;
    info!(
        grid_size = config.grid_size,
        battery = config.battery,
        obstacles = config.obstacles,
        "simulator configured"
    );
    let session = Session::new(config)?;

    info!(url = %args.nats_url, "connecting to NATS");
    let client = async_nats::connect(&args.nats_url).await?;
    info!("connected to NATS");

    let mut api = Api::new(Handler::new(session, args.prefix), client);
    api.run().await?;

    Ok(())
}
