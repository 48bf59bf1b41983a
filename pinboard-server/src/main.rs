use std::net::SocketAddr;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pinboard_core::AppConfig;
use pinboard_server::serve;

/// Pinboard message board server
#[derive(Parser, Debug)]
#[command(name = "pinboard-server", version)]
struct Args {
    /// Address to bind, e.g. 0.0.0.0:5000
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Database URL override (otherwise assembled from DB_* variables)
    #[arg(long)]
    database_url: Option<String>,
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = args.database_url {
        config.db.database_url = Some(url);
    }

    tracing::info!(db = %config.db.display_url(), "starting pinboard-server");
    serve(config).await
}
