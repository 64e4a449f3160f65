//! Historical forecast query.

use super::{Coordinate, DEFAULT_FORECAST_MODELS, DEFAULT_HOURLY, DateRange, QueryBuilder};
use crate::endpoints::Endpoint;
use crate::errors::MeteoError;
use crate::query::QueryParameters;
use crate::variables::VariableList;

/// Archived model forecasts for a recent date range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalForecastQuery {
    pub coordinate: Coordinate,
    pub dates: DateRange,
    pub hourly: VariableList,
    pub models: VariableList,
}

impl HistoricalForecastQuery {
    pub fn new(coordinate: Coordinate, dates: DateRange) -> Self {
        Self {
            coordinate,
            dates,
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

impl QueryBuilder for HistoricalForecastQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::HistoricalForecast
    }

    fn build(&self) -> Result<QueryParameters, MeteoError> {
        let mut params = QueryParameters::new();
        self.coordinate.write_to(&mut params);
        self.dates.write_to(&mut params);
        params.insert("hourly", self.hourly.to_query_value());
        params.insert_list("models", &self.models);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_are_always_sent() {
        let query = HistoricalForecastQuery::new(
            Coordinate::new(52.52, 13.419),
            DateRange::new("2024-01-01", "2024-01-07"),
        );
        let params = query.build().unwrap();

        assert_eq!(
            params.keys(),
            vec![
                "latitude",
                "longitude",
                "start_date",
                "end_date",
                "hourly",
                "models"
            ]
        );
        assert_eq!(params.get_str("start_date"), Some("2024-01-01".into()));
        assert_eq!(params.get_str("end_date"), Some("2024-01-07".into()));
        assert_eq!(query.endpoint(), Endpoint::HistoricalForecast);
    }

    #[test]
    fn test_empty_models_are_omitted() {
        let params = HistoricalForecastQuery::new(
            Coordinate::new(1.0, 2.0),
            DateRange::new("2023-06-01", "2023-06-30"),
        )
        .hourly(VariableList::parse("temperature_2m,relative_humidity_2m"))
        .models(VariableList::default())
        .build()
        .unwrap();

        assert!(!params.contains_key("models"));
        assert_eq!(
            params.get_str("hourly"),
            Some("temperature_2m,relative_humidity_2m".into())
        );
    }
}
