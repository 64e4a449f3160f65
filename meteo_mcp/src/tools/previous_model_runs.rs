//! Previous model runs tool implementation.

use log::debug;
use meteo_core::builders::{DEFAULT_PREVIOUS_DAYS, DEFAULT_PREVIOUS_RUNS_MODELS};
use meteo_core::{Coordinate, DateRange, Fetch, OpenMeteoClient, PreviousRunsQuery, VariableList};
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{default_hourly, tool_result};

/// Parameters for the get_previous_model_runs tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PreviousModelRunsParams {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format.
    pub start_date: String,
    /// End date in YYYY-MM-DD format.
    pub end_date: String,
    /// Comma-separated list of hourly variables. temperature_2m and precipitation
    /// automatically gain their _previous_dayN variants.
    #[serde(default = "default_hourly")]
    pub hourly: String,
    /// Comma-separated list of models to use for the forecast.
    #[serde(default = "default_models")]
    pub models: String,
    /// Number of previous days to retrieve (1-7, default: 5).
    #[serde(default = "default_previous_days")]
    pub previous_days: i64,
}

fn default_models() -> String {
    DEFAULT_PREVIOUS_RUNS_MODELS.to_string()
}

fn default_previous_days() -> i64 {
    DEFAULT_PREVIOUS_DAYS
}

impl PreviousModelRunsParams {
    pub fn to_query(&self) -> PreviousRunsQuery {
        PreviousRunsQuery::new(
            Coordinate::new(self.latitude, self.longitude),
            DateRange::new(&self.start_date, &self.end_date),
        )
        .hourly(VariableList::parse(&self.hourly))
        .models(VariableList::parse(&self.models))
        .previous_days(self.previous_days)
    }
}

/// Execute the get_previous_model_runs tool.
///
/// An out-of-range `previous_days` fails before anything is fetched.
pub async fn execute<F: Fetch>(
    client: &OpenMeteoClient<F>,
    params: &PreviousModelRunsParams,
) -> CallToolResult {
    debug!(
        "Tool: get_previous_model_runs, lat={}, lon={}, hourly={}, previous_days={}",
        params.latitude, params.longitude, params.hourly, params.previous_days
    );
    tool_result(client.get_previous_model_runs(&params.to_query()).await)
}
