//! Binary crate for the Macau SMG weather MCP server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Binding the MCP transport (streamable HTTP or stdio)

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so protocol traffic on stdout stays clean in stdio mode.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
