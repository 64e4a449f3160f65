//! Historical weather (archive) tool implementation.

use log::debug;
use meteo_core::builders::{
    DEFAULT_PRECIPITATION_UNIT, DEFAULT_TEMPERATURE_UNIT, DEFAULT_TIMEZONE,
    DEFAULT_WIND_SPEED_UNIT,
};
use meteo_core::{ArchiveQuery, Coordinate, DateRange, Fetch, OpenMeteoClient, VariableList};
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::tool_result;

/// Parameters for the get_historical_weather tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HistoricalWeatherParams {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format.
    pub start_date: String,
    /// End date in YYYY-MM-DD format.
    pub end_date: String,
    /// Comma-separated list of hourly variables (e.g., "temperature_2m,wind_speed_10m").
    #[serde(default)]
    pub hourly: Option<String>,
    /// Comma-separated list of daily aggregates (e.g., "temperature_2m_max,precipitation_sum").
    #[serde(default)]
    pub daily: Option<String>,
    /// Temperature unit: "celsius" or "fahrenheit".
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: String,
    /// Wind speed unit: "kmh", "ms", "mph" or "kn".
    #[serde(default = "default_wind_speed_unit")]
    pub wind_speed_unit: String,
    /// Precipitation unit: "mm" or "inch".
    #[serde(default = "default_precipitation_unit")]
    pub precipitation_unit: String,
    /// Timezone for timestamps (e.g., "GMT", "America/New_York", "auto").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_temperature_unit() -> String {
    DEFAULT_TEMPERATURE_UNIT.to_string()
}

fn default_wind_speed_unit() -> String {
    DEFAULT_WIND_SPEED_UNIT.to_string()
}

fn default_precipitation_unit() -> String {
    DEFAULT_PRECIPITATION_UNIT.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl HistoricalWeatherParams {
    pub fn to_query(&self) -> ArchiveQuery {
        ArchiveQuery::new(
            Coordinate::new(self.latitude, self.longitude),
            DateRange::new(&self.start_date, &self.end_date),
        )
        .hourly(VariableList::parse_optional(self.hourly.as_deref()))
        .daily(VariableList::parse_optional(self.daily.as_deref()))
        .temperature_unit(&self.temperature_unit)
        .wind_speed_unit(&self.wind_speed_unit)
        .precipitation_unit(&self.precipitation_unit)
        .timezone(&self.timezone)
    }
}

/// Execute the get_historical_weather tool.
pub async fn execute<F: Fetch>(
    client: &OpenMeteoClient<F>,
    params: &HistoricalWeatherParams,
) -> CallToolResult {
    debug!(
        "Tool: get_historical_weather, lat={}, lon={}, {}..{}",
        params.latitude, params.longitude, params.start_date, params.end_date
    );
    tool_result(client.get_historical_weather(&params.to_query()).await)
}
