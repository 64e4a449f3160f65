//! Query builders, one per upstream endpoint.
//!
//! Each builder holds the typed arguments of one tool call and turns them
//! into the [`QueryParameters`] for its endpoint. Validation happens here,
//! before any request is made.

mod archive;
mod forecast;
mod historical_forecast;
mod previous_runs;

pub use archive::ArchiveQuery;
pub use forecast::ForecastQuery;
pub use historical_forecast::HistoricalForecastQuery;
pub use previous_runs::PreviousRunsQuery;

use crate::endpoints::Endpoint;
use crate::errors::MeteoError;
use crate::query::QueryParameters;

pub const DEFAULT_HOURLY: &str = "temperature_2m";
pub const DEFAULT_FORECAST_MODELS: &str = "gfs_seamless";
pub const DEFAULT_PREVIOUS_RUNS_MODELS: &str = "ecmwf_ifs025,gem_seamless,icon_seamless";
pub const DEFAULT_PREVIOUS_DAYS: i64 = 5;
pub const MIN_PREVIOUS_DAYS: i64 = 1;
pub const MAX_PREVIOUS_DAYS: i64 = 7;
pub const DEFAULT_TEMPERATURE_UNIT: &str = "celsius";
pub const DEFAULT_WIND_SPEED_UNIT: &str = "kmh";
pub const DEFAULT_PRECIPITATION_UNIT: &str = "mm";
pub const DEFAULT_TIMEZONE: &str = "GMT";

/// A point in decimal degrees. Range checks are left to the upstream API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn write_to(&self, params: &mut QueryParameters) {
        params.insert("latitude", self.latitude);
        params.insert("longitude", self.longitude);
    }
}

/// Inclusive range of `YYYY-MM-DD` dates, passed through as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    fn write_to(&self, params: &mut QueryParameters) {
        params.insert("start_date", self.start_date.clone());
        params.insert("end_date", self.end_date.clone());
    }
}

/// Something that can be turned into a request against one endpoint.
pub trait QueryBuilder {
    /// The endpoint this query targets.
    fn endpoint(&self) -> Endpoint;

    /// Validates the arguments and assembles the query parameters.
    fn build(&self) -> Result<QueryParameters, MeteoError>;
}
