//! Forecast query.

use super::{Coordinate, DEFAULT_FORECAST_MODELS, DEFAULT_HOURLY, QueryBuilder};
use crate::endpoints::Endpoint;
use crate::errors::MeteoError;
use crate::query::QueryParameters;
use crate::variables::VariableList;

/// Hourly forecast for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub coordinate: Coordinate,
    pub hourly: VariableList,
    pub models: VariableList,
}

impl ForecastQuery {
    /// A forecast for `temperature_2m` from `gfs_seamless`.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            hourly: VariableList::parse(DEFAULT_HOURLY),
            models: VariableList::parse(DEFAULT_FORECAST_MODELS),
        }
    }

    pub fn hourly(mut self, hourly: VariableList) -> Self {
        self.hourly = hourly;
        self
    }

    pub fn models(mut self, models: VariableList) -> Self {
        self.models = models;
        self
    }
}

impl QueryBuilder for ForecastQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Forecast
    }

    fn build(&self) -> Result<QueryParameters, MeteoError> {
        let mut params = QueryParameters::new();
        self.coordinate.write_to(&mut params);
        params.insert("hourly", self.hourly.to_query_value());
        params.insert_list("models", &self.models);
        Ok(params)
    }
}
