//! statuswatch - GitHub status monitor
//!
//! Serves `check_github_status`, `start_monitoring` and `stop_monitoring`
//! to an MCP client over stdio.

mod cli;
mod server;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    server::init_tracing(&config.logging)?;
    server::run_server(config).await
}
