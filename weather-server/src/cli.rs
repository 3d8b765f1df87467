use clap::Parser;

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "macau-weather-server", version, about = "Macau SMG weather MCP server")]
pub struct Cli {
    /// Host address to bind the streamable HTTP server on.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Serve MCP over stdio instead of HTTP.
    #[arg(long)]
    pub stdio: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.stdio {
            server::serve_stdio().await
        } else {
            server::serve_http(&self.host, self.port).await
        }
    }
}
