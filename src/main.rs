use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use courier::config::Config;
use courier::server;

#[derive(Debug, Parser)]
#[command(name = "courier", about = "Minimal HTTP/1.1 file and echo server")]
struct Cli {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root directory served under /files/
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4221
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    if let Some(directory) = cli.directory {
        cfg.files.directory = Some(directory);
    }
    if let Some(listen) = cli.listen {
        cfg.server.listen_addr = listen;
    }
    cfg.validate()?;

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
