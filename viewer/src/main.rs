//! Terminal view over the films fetch controller.
//!
//! Renders the current view whenever the state changes. Press Enter to
//! fetch again, `q` to quit.

mod app;
mod config;
mod transport;

use anyhow::Result;
use films_core::Lifecycle;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::transport::UreqTransport;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, lifecycle = ?config.lifecycle, "starting viewer");

    if config.lifecycle == Lifecycle::Manual {
        println!("Press Enter to fetch movies, q to quit.");
    }

    let input = BufReader::new(tokio::io::stdin());
    app::run(&config, UreqTransport::default(), input, std::io::stdout()).await?;
    Ok(())
}
