//! Previous model runs query.

use super::{
    Coordinate, DEFAULT_HOURLY, DEFAULT_PREVIOUS_DAYS, DEFAULT_PREVIOUS_RUNS_MODELS, DateRange,
    MAX_PREVIOUS_DAYS, MIN_PREVIOUS_DAYS, QueryBuilder,
};
use crate::endpoints::Endpoint;
use crate::errors::MeteoError;
use crate::query::QueryParameters;
use crate::variables::VariableList;

/// Values from earlier model runs alongside the current one.
///
/// `temperature_2m` and `precipitation` are expanded with
/// `_previous_day1..=previous_days` unless the caller already asked for one
/// of their previous-day variants. The previous-runs API takes no
/// `forecast_days` or `past_days`, so those are never sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousRunsQuery {
    pub coordinate: Coordinate,
    pub dates: DateRange,
    pub hourly: VariableList,
    pub models: VariableList,
    pub previous_days: i64,
}

impl PreviousRunsQuery {
    pub fn new(coordinate: Coordinate, dates: DateRange) -> Self {
        Self {
            coordinate,
            dates,
            hourly: VariableList::parse(DEFAULT_HOURLY),
            models: VariableList::parse(DEFAULT_PREVIOUS_RUNS_MODELS),
            previous_days: DEFAULT_PREVIOUS_DAYS,
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

    pub fn previous_days(mut self, previous_days: i64) -> Self {
        self.previous_days = previous_days;
        self
    }

    /// Checks `previous_days` against `[1, 7]`.
    pub fn validated_previous_days(&self) -> Result<u8, MeteoError> {
        if !(MIN_PREVIOUS_DAYS..=MAX_PREVIOUS_DAYS).contains(&self.previous_days) {
            return Err(MeteoError::ParameterRange {
                name: "previous_days",
                value: self.previous_days,
                min: MIN_PREVIOUS_DAYS,
                max: MAX_PREVIOUS_DAYS,
            });
        }
        // In range, so this fits.
        Ok(self.previous_days as u8)
    }

    /// The hourly list with previous-day variants added.
    pub fn expanded_hourly(&self) -> Result<VariableList, MeteoError> {
        let days = self.validated_previous_days()?;
        Ok(self.hourly.with_previous_days(days))
    }
}

impl QueryBuilder for PreviousRunsQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::PreviousRuns
    }

    fn build(&self) -> Result<QueryParameters, MeteoError> {
        let hourly = self.expanded_hourly()?;

        let mut params = QueryParameters::new();
        self.coordinate.write_to(&mut params);
        self.dates.write_to(&mut params);
        params.insert("hourly", hourly.to_query_value());
        params.insert_list("models", &self.models);
        Ok(params)
    }
}
