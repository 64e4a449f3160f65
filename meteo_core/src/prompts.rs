//! Natural-language prompt templates.
//!
//! Pure string formatting, no I/O. Each template seeds an agent request with
//! the tool to call and the upstream variable names worth asking for.

pub const DEFAULT_PROMPT_DAYS: i64 = 7;

/// Current conditions at a location.
pub fn current_weather(location: &str) -> String {
    format!(
        "What's the current weather in {location}? Include temperature, precipitation, wind speed, \
         and cloud cover. Use the get_forecast tool with latitude and longitude coordinates."
    )
}

/// A multi-day forecast.
pub fn weather_forecast(location: &str, days: i64) -> String {
    format!(
        "Give me a {days}-day weather forecast for {location}. Include daily highs/lows, \
         precipitation chances, and general conditions. Use appropriate hourly variables."
    )
}

/// Extreme conditions over the next two days.
pub fn severe_weather_check(location: &str) -> String {
    format!(
        "Check {location} for any severe weather warnings or extreme conditions in the next 48 \
         hours. Look for high winds, heavy precipitation, or extreme temperatures using \
         wind_gusts_10m, precipitation_probability, and temperature extremes."
    )
}

/// One variable across several weather models.
pub fn compare_models(location: &str, variable: &str) -> String {
    format!(
        "Compare {variable} forecasts for {location} using different weather models (GFS, ECMWF, \
         ICON). Show the differences between models by requesting multiple models in the models \
         parameter."
    )
}

/// Recent past weather for a date range.
pub fn historical_weather(location: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "Show me the historical weather data for {location} from {start_date} to {end_date}. \
         Include temperature trends and precipitation totals using the get_historical_forecast \
         tool."
    )
}

pub fn agriculture_forecast(location: &str) -> String {
    format!(
        "Provide agriculture-focused weather data for {location} including soil moisture \
         (soil_moisture_0_to_1cm), evapotranspiration, precipitation, and temperature for the \
         next 7 days."
    )
}

/// Radiation values for solar energy planning.
pub fn solar_radiation(location: &str, days: i64) -> String {
    format!(
        "Show solar radiation forecast for {location} for the next {days} days. Include \
         direct_radiation, diffuse_radiation, and shortwave_radiation values for solar energy \
         planning."
    )
}

pub fn travel_weather(destination: &str, date: &str) -> String {
    format!(
        "What will the weather be like in {destination} on {date}? Include temperature range, \
         precipitation chances, visibility, and general conditions for travel planning."
    )
}

/// Multi-decade climate trends from the archive.
///
/// Without a month the whole year is analysed.
pub fn climate_analysis(
    location: &str,
    start_year: i64,
    end_year: i64,
    month: Option<i64>,
) -> String {
    let period = match month {
        Some(month) => format!("month {month} of each year"),
        None => "the whole year".to_string(),
    };
    format!(
        "Analyze the climate of {location} from {start_year} to {end_year}, focusing on {period}. \
         Use the get_historical_weather tool with daily variables such as temperature_2m_max, \
         temperature_2m_min, and precipitation_sum, requesting {start_year}-01-01 through \
         {end_year}-12-31, and describe long-term trends and anomalies."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_weather() {
        let prompt = current_weather("New York");
        assert!(prompt.contains("New York"));
        assert!(prompt.contains("temperature"));
        assert!(prompt.contains("get_forecast"));
    }

    #[test]
    fn test_weather_forecast() {
        let prompt = weather_forecast("London", 5);
        assert!(prompt.contains("London"));
        assert!(prompt.contains("5-day"));
        assert!(prompt.contains("highs/lows"));
    }

    #[test]
    fn test_severe_weather_check() {
        let prompt = severe_weather_check("Miami");
        assert!(prompt.contains("wind_gusts_10m"));
        assert!(prompt.contains("precipitation_probability"));
    }

    #[test]
    fn test_compare_models() {
        let prompt = compare_models("Berlin", "precipitation");
        assert!(prompt.starts_with("Compare precipitation forecasts for Berlin"));
        assert!(prompt.contains("models parameter"));
    }

    #[test]
    fn test_historical_weather_references_tool() {
        let prompt = historical_weather("Paris", "2024-01-01", "2024-01-31");
        assert!(prompt.contains("from 2024-01-01 to 2024-01-31"));
        assert!(prompt.contains("get_historical_forecast"));
    }

    #[test]
    fn test_solar_and_agriculture() {
        assert!(solar_radiation("Phoenix", 3).contains("next 3 days"));
        assert!(solar_radiation("Phoenix", 3).contains("shortwave_radiation"));
        assert!(agriculture_forecast("Iowa").contains("soil_moisture_0_to_1cm"));
    }

    #[test]
    fn test_travel_weather() {
        let prompt = travel_weather("Lisbon", "2024-07-14");
        assert!(prompt.contains("in Lisbon on 2024-07-14"));
        assert!(prompt.contains("visibility"));
    }

    #[test]
    fn test_climate_analysis() {
        let prompt = climate_analysis("Tokyo", 2000, 2020, Some(7));
        assert!(prompt.contains("Tokyo"));
        assert!(prompt.contains("2000"));
        assert!(prompt.contains("2020"));
        assert!(prompt.contains("month 7"));
        assert!(prompt.contains("get_historical_weather"));

        let whole_year = climate_analysis("Tokyo", 2000, 2020, None);
        assert!(whole_year.contains("the whole year"));
        assert!(!whole_year.contains("month"));
    }
}
