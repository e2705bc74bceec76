//! Hosting Server Binary
//!
//! Serves the rock-paper-scissors tournament over HTTP.

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    hosting::Server::run(hosting::Config::parse()).await?;
    Ok(())
}
