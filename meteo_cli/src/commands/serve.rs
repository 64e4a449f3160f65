//! Server command implementation.

use std::net::SocketAddr;

use log::info;
use meteo_core::{HttpFetcher, OpenMeteoClient};
use meteo_mcp::MeteoMcpServer;

use crate::cli::{ServeArgs, Transport};
use crate::errors::CliError;

/// Start the MCP server on the configured transport.
pub fn serve(args: &ServeArgs) -> Result<(), CliError> {
    let fetcher = HttpFetcher::with_timeout(args.upstream.timeout())?;
    let client = OpenMeteoClient::new(fetcher, args.upstream.endpoints());
    let server = MeteoMcpServer::new(client);

    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        match args.transport {
            Transport::Stdio => server.serve_stdio().await?,
            Transport::Http => {
                let addr = SocketAddr::new(args.host, args.port);
                info!("Health check available at http://{}/health", addr);
                server.serve_http(addr).await?
            }
        }
        Ok::<(), CliError>(())
    })
}
