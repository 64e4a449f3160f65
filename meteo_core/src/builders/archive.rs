//! Historical weather (archive) query.

use super::{
    Coordinate, DEFAULT_PRECIPITATION_UNIT, DEFAULT_TEMPERATURE_UNIT, DEFAULT_TIMEZONE,
    DEFAULT_WIND_SPEED_UNIT, DateRange, QueryBuilder,
};
use crate::endpoints::Endpoint;
use crate::errors::MeteoError;
use crate::query::QueryParameters;
use crate::variables::VariableList;

/// Long-range reanalysis data from the climate archive.
///
/// Units and timezone always carry a value. `hourly` and `daily` are
/// independent and only sent when non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveQuery {
    pub coordinate: Coordinate,
    pub dates: DateRange,
    pub hourly: VariableList,
    pub daily: VariableList,
    pub temperature_unit: String,
    pub wind_speed_unit: String,
    pub precipitation_unit: String,
    pub timezone: String,
}

impl ArchiveQuery {
    pub fn new(coordinate: Coordinate, dates: DateRange) -> Self {
        Self {
            coordinate,
            dates,
            hourly: VariableList::default(),
            daily: VariableList::default(),
            temperature_unit: DEFAULT_TEMPERATURE_UNIT.to_string(),
            wind_speed_unit: DEFAULT_WIND_SPEED_UNIT.to_string(),
            precipitation_unit: DEFAULT_PRECIPITATION_UNIT.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    pub fn hourly(mut self, hourly: VariableList) -> Self {
        self.hourly = hourly;
        self
    }

    pub fn daily(mut self, daily: VariableList) -> Self {
        self.daily = daily;
        self
    }

    pub fn temperature_unit(mut self, unit: impl Into<String>) -> Self {
        self.temperature_unit = unit.into();
        self
    }

    pub fn wind_speed_unit(mut self, unit: impl Into<String>) -> Self {
        self.wind_speed_unit = unit.into();
        self
    }

    pub fn precipitation_unit(mut self, unit: impl Into<String>) -> Self {
        self.precipitation_unit = unit.into();
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }
}

impl QueryBuilder for ArchiveQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Archive
    }

    fn build(&self) -> Result<QueryParameters, MeteoError> {
        let mut params = QueryParameters::new();
        self.coordinate.write_to(&mut params);
        self.dates.write_to(&mut params);
        params.insert_list("hourly", &self.hourly);
        params.insert_list("daily", &self.daily);
        params.insert("temperature_unit", self.temperature_unit.clone());
        params.insert("wind_speed_unit", self.wind_speed_unit.clone());
        params.insert("precipitation_unit", self.precipitation_unit.clone());
        params.insert("timezone", self.timezone.clone());
        Ok(params)
    }
}
