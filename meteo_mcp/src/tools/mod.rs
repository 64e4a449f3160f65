//! MCP tool implementations for Open-Meteo.
//!
//! Each tool has a parameter struct (the schema clients see) and an
//! `execute` function that runs it against any [`meteo_core::Fetch`]
//! implementation.

pub mod forecast;
pub mod historical_forecast;
pub mod historical_weather;
pub mod previous_model_runs;

pub use forecast::ForecastParams;
pub use historical_forecast::HistoricalForecastParams;
pub use historical_weather::HistoricalWeatherParams;
pub use previous_model_runs::PreviousModelRunsParams;

use log::debug;
use meteo_core::MeteoError;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Maps the outcome of an upstream call to a tool result.
///
/// Success carries the upstream JSON unmodified; any error becomes an
/// error result and never a partial payload.
pub fn tool_result(outcome: Result<Value, MeteoError>) -> CallToolResult {
    match outcome {
        Ok(body) => match Content::json(body) {
            Ok(content) => CallToolResult::success(vec![content]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to encode upstream response: {}",
                e.message
            ))]),
        },
        Err(err) => {
            debug!("Tool call failed: {}", err);
            CallToolResult::error(vec![Content::text(error_message(&err))])
        }
    }
}

/// User-facing text for a failed tool call.
pub fn error_message(err: &MeteoError) -> String {
    match err {
        MeteoError::ParameterRange { .. } => format!("Invalid parameter: {}", err),
        MeteoError::UpstreamStatus { .. } | MeteoError::Decode(_) => {
            format!("Open-Meteo request failed: {}", err)
        }
        MeteoError::Transport(_) | MeteoError::InvalidUrl { .. } => {
            format!("Could not reach Open-Meteo: {}", err)
        }
    }
}

fn default_hourly() -> String {
    meteo_core::builders::DEFAULT_HOURLY.to_string()
}

fn default_forecast_models() -> String {
    meteo_core::builders::DEFAULT_FORECAST_MODELS.to_string()
}
