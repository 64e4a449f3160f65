use std::net::IpAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use meteo_core::Endpoints;
use meteo_core::endpoints::{ARCHIVE_URL, FORECAST_URL, HISTORICAL_FORECAST_URL, PREVIOUS_RUNS_URL};

/// Defines the top-level interface for the Open-Meteo MCP server with clap.
///
/// Without a subcommand the server is started with the given flags.
#[derive(Parser, Debug)]
#[command(name = "open-meteo-mcp")]
#[command(version, about = "Open-Meteo MCP server: weather forecasts and history for AI assistants.")]
pub struct MeteoCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<MeteoCliCommand>,
}

/// Defines the available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum MeteoCliCommand {
    /// Render a prompt to stdout without starting the server.
    Prompt {
        /// Prompt name (e.g. current_weather, weather_forecast)
        name: String,
        /// Prompt arguments. Format: KEY=VALUE (e.g. location=Berlin days=3)
        #[arg(value_name = "KEY=VALUE")]
        arguments: Vec<String>,
    },
    /// List the available prompts and their arguments.
    Prompts,
}

/// How MCP clients connect.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// Stateless streamable HTTP with a /health route
    Http,
}

/// Server settings.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Transport to serve MCP over
    #[arg(short, long, env = "OPEN_METEO_MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Address to bind when using the http transport
    #[arg(long, env = "OPEN_METEO_MCP_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind when using the http transport
    #[arg(long, env = "OPEN_METEO_MCP_PORT", default_value_t = 8000)]
    pub port: u16,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

/// Upstream Open-Meteo settings.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct UpstreamArgs {
    /// Forecast API endpoint
    #[arg(long, env = "OPEN_METEO_FORECAST_URL", default_value = FORECAST_URL)]
    pub forecast_url: String,

    /// Historical forecast API endpoint
    #[arg(long, env = "OPEN_METEO_HISTORICAL_FORECAST_URL", default_value = HISTORICAL_FORECAST_URL)]
    pub historical_forecast_url: String,

    /// Previous model runs API endpoint
    #[arg(long, env = "OPEN_METEO_PREVIOUS_RUNS_URL", default_value = PREVIOUS_RUNS_URL)]
    pub previous_runs_url: String,

    /// Historical weather (archive) API endpoint
    #[arg(long, env = "OPEN_METEO_ARCHIVE_URL", default_value = ARCHIVE_URL)]
    pub archive_url: String,

    /// Upstream request timeout in seconds. Requests wait indefinitely if unset.
    #[arg(long, env = "OPEN_METEO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl UpstreamArgs {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            forecast: self.forecast_url.clone(),
            historical_forecast: self.historical_forecast_url.clone(),
            previous_runs: self.previous_runs_url.clone(),
            archive: self.archive_url.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
