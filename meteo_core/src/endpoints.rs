//! Upstream Open-Meteo endpoints.

use std::fmt;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const HISTORICAL_FORECAST_URL: &str =
    "https://historical-forecast-api.open-meteo.com/v1/forecast";
pub const PREVIOUS_RUNS_URL: &str = "https://previous-runs-api.open-meteo.com/v1/forecast";
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// The four upstream APIs, one per query builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Forecast,
    HistoricalForecast,
    PreviousRuns,
    Archive,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Forecast => "forecast",
            Endpoint::HistoricalForecast => "historical-forecast",
            Endpoint::PreviousRuns => "previous-runs",
            Endpoint::Archive => "archive",
        };
        write!(f, "{}", name)
    }
}

/// Base URLs for each endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub forecast: String,
    pub historical_forecast: String,
    pub previous_runs: String,
    pub archive: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast: FORECAST_URL.to_string(),
            historical_forecast: HISTORICAL_FORECAST_URL.to_string(),
            previous_runs: PREVIOUS_RUNS_URL.to_string(),
            archive: ARCHIVE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Points every endpoint at the same base, e.g. a local test server.
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            forecast: format!("{}/forecast", base),
            historical_forecast: format!("{}/historical-forecast", base),
            previous_runs: format!("{}/previous-runs", base),
            archive: format!("{}/archive", base),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Forecast => &self.forecast,
            Endpoint::HistoricalForecast => &self.historical_forecast,
            Endpoint::PreviousRuns => &self.previous_runs,
            Endpoint::Archive => &self.archive,
        }
    }
}
