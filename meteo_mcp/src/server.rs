//! Core MCP server implementation for Open-Meteo.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, info};
use meteo_core::{HttpFetcher, OpenMeteoClient};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters,
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::stdio,
    transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};
use thiserror::Error;

use crate::health;
use crate::prompts;
use crate::tools::{
    self, ForecastParams, HistoricalForecastParams, HistoricalWeatherParams,
    PreviousModelRunsParams,
};

/// Path the streamable HTTP transport is mounted at.
pub const MCP_PATH: &str = "/mcp";

/// Name the server reports to MCP clients.
pub const SERVER_NAME: &str = "open-meteo";

/// Error type for MCP server operations.
#[derive(Error, Debug)]
pub enum ServerError {
    /// MCP protocol error
    #[error("MCP error: {0}")]
    Mcp(String),
    /// Binding or serving the HTTP listener failed
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// MCP server for the Open-Meteo APIs.
///
/// Exposes forecast, historical forecast, previous model runs and archive
/// queries as MCP tools, plus a set of prompts that seed agent requests.
#[derive(Clone)]
pub struct MeteoMcpServer {
    client: Arc<OpenMeteoClient<HttpFetcher>>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<MeteoMcpServer>,
}

#[tool_router]
impl MeteoMcpServer {
    /// Create a new MCP server issuing requests through `client`.
    pub fn new(client: OpenMeteoClient<HttpFetcher>) -> Self {
        debug!("Creating MCP server with endpoints: {:?}", client.endpoints());
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Fetch hourly forecast for a location. \
        Provide latitude and longitude in decimal degrees, a comma-separated list of hourly variables \
        (e.g., 'temperature_2m,precipitation') and optionally a comma-separated list of models. \
        Returns the raw Open-Meteo JSON response.")]
    async fn get_forecast(
        &self,
        Parameters(params): Parameters<ForecastParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::forecast::execute(&self.client, &params).await)
    }

    #[tool(description = "Fetch historical hourly forecast for a location. \
        Returns archived model forecasts between start_date and end_date (YYYY-MM-DD). \
        Use get_historical_weather instead for multi-decade reanalysis data.")]
    async fn get_historical_forecast(
        &self,
        Parameters(params): Parameters<HistoricalForecastParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::historical_forecast::execute(&self.client, &params).await)
    }

    #[tool(description = "Fetch previous model runs for a location. \
        temperature_2m and precipitation are automatically extended with their \
        _previous_day1.._previous_dayN variants, where N is previous_days (1-7, default: 5), \
        unless such variants are already requested.")]
    async fn get_previous_model_runs(
        &self,
        Parameters(params): Parameters<PreviousModelRunsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::previous_model_runs::execute(&self.client, &params).await)
    }

    #[tool(description = "Fetch historical weather from the long-range climate archive. \
        Provide hourly and/or daily variables (e.g., daily='temperature_2m_max,precipitation_sum'). \
        Units default to celsius, kmh and mm; timezone defaults to GMT.")]
    async fn get_historical_weather(
        &self,
        Parameters(params): Parameters<HistoricalWeatherParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::historical_weather::execute(&self.client, &params).await)
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        info!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }

    /// Serve stateless streamable HTTP at `/mcp`, plus `/health`.
    ///
    /// This method blocks until the listener fails.
    pub async fn serve_http(self, addr: SocketAddr) -> Result<(), ServerError> {
        let service = StreamableHttpService::new(
            move || Ok(self.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig {
                stateful_mode: false,
                ..Default::default()
            },
        );
        let router = health::router().nest_service(MCP_PATH, service);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(
            "Starting MCP server on http://{}{}",
            listener.local_addr()?,
            MCP_PATH
        );
        axum::serve(listener, router).await?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for MeteoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Open-Meteo weather server. Use tools to fetch forecasts, historical forecasts, \
                 previous model runs and long-range archive data by latitude and longitude. \
                 Use prompts for ready-made weather questions."
                    .into(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: prompts::list(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("Getting prompt: {}", request.name);
        render_prompt(&request.name, request.arguments.as_ref())
    }
}

/// Renders a registered prompt as a single user message.
///
/// Unknown prompts and bad arguments are `invalid_params` errors.
fn render_prompt(
    name: &str,
    arguments: Option<&JsonObject>,
) -> Result<GetPromptResult, McpError> {
    let spec = prompts::find(name).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
    let text = spec
        .render(arguments)
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

    Ok(GetPromptResult {
        description: Some(spec.description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}
