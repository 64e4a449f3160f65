//! Forecast tool implementation.

use log::debug;
use meteo_core::{Coordinate, Fetch, ForecastQuery, OpenMeteoClient, VariableList};
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{default_forecast_models, default_hourly, tool_result};

/// Parameters for the get_forecast tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ForecastParams {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Comma-separated list of hourly variables (e.g., "temperature_2m,precipitation").
    #[serde(default = "default_hourly")]
    pub hourly: String,
    /// Comma-separated list of models to use for the forecast. Empty to let the API choose.
    #[serde(default = "default_forecast_models")]
    pub models: String,
}

impl ForecastParams {
    pub fn to_query(&self) -> ForecastQuery {
        ForecastQuery::new(Coordinate::new(self.latitude, self.longitude))
            .hourly(VariableList::parse(&self.hourly))
            .models(VariableList::parse(&self.models))
    }
}

/// Execute the get_forecast tool.
pub async fn execute<F: Fetch>(
    client: &OpenMeteoClient<F>,
    params: &ForecastParams,
) -> CallToolResult {
    debug!(
        "Tool: get_forecast, lat={}, lon={}, hourly={}",
        params.latitude, params.longitude, params.hourly
    );
    tool_result(client.get_forecast(&params.to_query()).await)
}
