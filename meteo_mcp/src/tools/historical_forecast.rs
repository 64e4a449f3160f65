//! Historical forecast tool implementation.

use log::debug;
use meteo_core::{
    Coordinate, DateRange, Fetch, HistoricalForecastQuery, OpenMeteoClient, VariableList,
};
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{default_forecast_models, default_hourly, tool_result};

/// Parameters for the get_historical_forecast tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HistoricalForecastParams {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format.
    pub start_date: String,
    /// End date in YYYY-MM-DD format.
    pub end_date: String,
    /// Comma-separated list of hourly variables (e.g., "temperature_2m,precipitation").
    #[serde(default = "default_hourly")]
    pub hourly: String,
    /// Comma-separated list of models to use for the forecast.
    #[serde(default = "default_forecast_models")]
    pub models: String,
}

impl HistoricalForecastParams {
    pub fn to_query(&self) -> HistoricalForecastQuery {
        HistoricalForecastQuery::new(
            Coordinate::new(self.latitude, self.longitude),
            DateRange::new(&self.start_date, &self.end_date),
        )
        .hourly(VariableList::parse(&self.hourly))
        .models(VariableList::parse(&self.models))
    }
}

/// Execute the get_historical_forecast tool.
pub async fn execute<F: Fetch>(
    client: &OpenMeteoClient<F>,
    params: &HistoricalForecastParams,
) -> CallToolResult {
    debug!(
        "Tool: get_historical_forecast, lat={}, lon={}, {}..{}",
        params.latitude, params.longitude, params.start_date, params.end_date
    );
    tool_result(client.get_historical_forecast(&params.to_query()).await)
}
