//! Prompt registry for the Open-Meteo MCP server.
//!
//! Maps prompt names to their argument lists and the templates in
//! [`meteo_core::prompts`]. Arguments arrive as a JSON object whose values
//! may be strings or numbers.

use meteo_core::prompts::{self, DEFAULT_PROMPT_DAYS};
use rmcp::model::{JsonObject, Prompt, PromptArgument};
use serde_json::Value;
use thiserror::Error;

/// Errors from looking up or rendering a prompt.
#[derive(Error, Debug, PartialEq)]
pub enum PromptError {
    #[error("Unknown prompt '{0}'")]
    UnknownPrompt(String),
    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },
    #[error("Argument '{argument}' must be an integer, got '{value}'")]
    InvalidInteger {
        argument: &'static str,
        value: String,
    },
}

/// One declared prompt argument.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A registered prompt.
pub struct PromptSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [ArgumentSpec],
    render: fn(&PromptArgs) -> Result<String, PromptError>,
}

impl PromptSpec {
    /// The MCP listing entry for this prompt.
    pub fn to_prompt(&self) -> Prompt {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| PromptArgument {
                name: arg.name.to_string(),
                title: None,
                description: Some(arg.description.to_string()),
                required: Some(arg.required),
            })
            .collect();
        Prompt::new(self.name, Some(self.description), Some(arguments))
    }

    pub fn render(&self, arguments: Option<&JsonObject>) -> Result<String, PromptError> {
        let args = PromptArgs {
            prompt: self.name,
            values: arguments,
        };
        (self.render)(&args)
    }
}

/// Typed access to the raw argument object of one prompt request.
pub struct PromptArgs<'a> {
    prompt: &'static str,
    values: Option<&'a JsonObject>,
}

impl PromptArgs<'_> {
    fn raw(&self, name: &str) -> Option<&Value> {
        self.values
            .and_then(|values| values.get(name))
            .filter(|value| !value.is_null())
    }

    /// A required text argument.
    pub fn text(&self, name: &'static str) -> Result<String, PromptError> {
        match self.raw(name) {
            Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
            Some(Value::String(_)) | None => Err(PromptError::MissingArgument {
                prompt: self.prompt,
                argument: name,
            }),
            Some(other) => Ok(other.to_string()),
        }
    }

    /// An optional integer argument, given as a number or numeric string.
    pub fn integer(&self, name: &'static str) -> Result<Option<i64>, PromptError> {
        let invalid = |value: String| PromptError::InvalidInteger {
            argument: name,
            value,
        };
        match self.raw(name) {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(n.to_string())),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid(s.clone())),
            Some(other) => Err(invalid(other.to_string())),
        }
    }

    /// A required integer argument.
    pub fn required_integer(&self, name: &'static str) -> Result<i64, PromptError> {
        self.integer(name)?.ok_or(PromptError::MissingArgument {
            prompt: self.prompt,
            argument: name,
        })
    }
}

const LOCATION: ArgumentSpec = ArgumentSpec {
    name: "location",
    description: "City name or coordinates (e.g., 'New York' or '40.7,-74.0')",
    required: true,
};

const DAYS: ArgumentSpec = ArgumentSpec {
    name: "days",
    description: "Number of days to forecast (default: 7)",
    required: false,
};

/// All prompts served, in listing order.
pub static PROMPTS: &[PromptSpec] = &[
    PromptSpec {
        name: "current_weather",
        description: "Get current weather for a location.",
        arguments: &[LOCATION],
        render: render_current_weather,
    },
    PromptSpec {
        name: "weather_forecast",
        description: "Get weather forecast for next few days.",
        arguments: &[LOCATION, DAYS],
        render: render_weather_forecast,
    },
    PromptSpec {
        name: "severe_weather_check",
        description: "Check for severe weather conditions.",
        arguments: &[LOCATION],
        render: render_severe_weather_check,
    },
    PromptSpec {
        name: "compare_models",
        description: "Compare forecasts from different weather models.",
        arguments: &[
            LOCATION,
            ArgumentSpec {
                name: "variable",
                description: "Weather variable to compare (e.g., temperature, precipitation)",
                required: true,
            },
        ],
        render: render_compare_models,
    },
    PromptSpec {
        name: "historical_weather",
        description: "Get historical weather data for a date range.",
        arguments: &[
            LOCATION,
            ArgumentSpec {
                name: "start_date",
                description: "Start date in YYYY-MM-DD format",
                required: true,
            },
            ArgumentSpec {
                name: "end_date",
                description: "End date in YYYY-MM-DD format",
                required: true,
            },
        ],
        render: render_historical_weather,
    },
    PromptSpec {
        name: "agriculture_forecast",
        description: "Get agriculture-relevant weather data.",
        arguments: &[LOCATION],
        render: render_agriculture_forecast,
    },
    PromptSpec {
        name: "solar_radiation",
        description: "Get solar radiation forecast for solar energy planning.",
        arguments: &[LOCATION, DAYS],
        render: render_solar_radiation,
    },
    PromptSpec {
        name: "travel_weather",
        description: "Get weather conditions for travel planning.",
        arguments: &[
            ArgumentSpec {
                name: "destination",
                description: "Travel destination",
                required: true,
            },
            ArgumentSpec {
                name: "date",
                description: "Travel date (YYYY-MM-DD)",
                required: true,
            },
        ],
        render: render_travel_weather,
    },
    PromptSpec {
        name: "climate_analysis",
        description: "Analyze long-term climate trends from the historical archive.",
        arguments: &[
            LOCATION,
            ArgumentSpec {
                name: "start_year",
                description: "First year of the analysis period",
                required: true,
            },
            ArgumentSpec {
                name: "end_year",
                description: "Last year of the analysis period",
                required: true,
            },
            ArgumentSpec {
                name: "month",
                description: "Month to focus on (1-12); whole year if omitted",
                required: false,
            },
        ],
        render: render_climate_analysis,
    },
];

/// Looks up a prompt by name.
pub fn find(name: &str) -> Result<&'static PromptSpec, PromptError> {
    PROMPTS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| PromptError::UnknownPrompt(name.to_string()))
}

/// Listing entries for every prompt.
pub fn list() -> Vec<Prompt> {
    PROMPTS.iter().map(PromptSpec::to_prompt).collect()
}

fn render_current_weather(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::current_weather(&args.text("location")?))
}

fn render_weather_forecast(args: &PromptArgs) -> Result<String, PromptError> {
    let days = args.integer("days")?.unwrap_or(DEFAULT_PROMPT_DAYS);
    Ok(prompts::weather_forecast(&args.text("location")?, days))
}

fn render_severe_weather_check(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::severe_weather_check(&args.text("location")?))
}

fn render_compare_models(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::compare_models(
        &args.text("location")?,
        &args.text("variable")?,
    ))
}

fn render_historical_weather(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::historical_weather(
        &args.text("location")?,
        &args.text("start_date")?,
        &args.text("end_date")?,
    ))
}

fn render_agriculture_forecast(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::agriculture_forecast(&args.text("location")?))
}

fn render_solar_radiation(args: &PromptArgs) -> Result<String, PromptError> {
    let days = args.integer("days")?.unwrap_or(DEFAULT_PROMPT_DAYS);
    Ok(prompts::solar_radiation(&args.text("location")?, days))
}

fn render_travel_weather(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::travel_weather(
        &args.text("destination")?,
        &args.text("date")?,
    ))
}

fn render_climate_analysis(args: &PromptArgs) -> Result<String, PromptError> {
    Ok(prompts::climate_analysis(
        &args.text("location")?,
        args.required_integer("start_year")?,
        args.required_integer("end_year")?,
        args.integer("month")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected a JSON object"),
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = PROMPTS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PROMPTS.len());
        assert_eq!(PROMPTS.len(), 9);
    }

    #[test]
    fn test_list_declares_arguments() {
        let prompts = list();
        let forecast = prompts
            .iter()
            .find(|p| p.name == "weather_forecast")
            .unwrap();
        let args = forecast.arguments.as_ref().unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "location");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].name, "days");
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_render_with_defaults() {
        let args = object(json!({ "location": "London" }));
        let text = find("weather_forecast")
            .unwrap()
            .render(Some(&args))
            .unwrap();
        assert!(text.contains("7-day"));
    }

    #[test]
    fn test_render_accepts_numbers_and_numeric_strings() {
        let as_number = object(json!({ "location": "London", "days": 5 }));
        let as_string = object(json!({ "location": "London", "days": "5" }));
        let spec = find("weather_forecast").unwrap();

        assert!(spec.render(Some(&as_number)).unwrap().contains("5-day"));
        assert!(spec.render(Some(&as_string)).unwrap().contains("5-day"));
    }

    #[test]
    fn test_render_climate_analysis() {
        let args = object(json!({
            "location": "Tokyo",
            "start_year": "2000",
            "end_year": 2020,
            "month": "7"
        }));
        let text = find("climate_analysis")
            .unwrap()
            .render(Some(&args))
            .unwrap();

        assert!(text.contains("Tokyo"));
        assert!(text.contains("month 7"));
        assert!(text.contains("get_historical_weather"));
    }

    #[test]
    fn test_missing_required_argument() {
        let err = find("travel_weather")
            .unwrap()
            .render(Some(&object(json!({ "destination": "Rome" }))))
            .unwrap_err();
        assert_eq!(
            err,
            PromptError::MissingArgument {
                prompt: "travel_weather",
                argument: "date"
            }
        );

        let err = find("current_weather").unwrap().render(None).unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument { .. }));
    }

    #[test]
    fn test_invalid_integer() {
        let err = find("solar_radiation")
            .unwrap()
            .render(Some(&object(json!({ "location": "Oslo", "days": "many" }))))
            .unwrap_err();
        assert_eq!(
            err,
            PromptError::InvalidInteger {
                argument: "days",
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_prompt() {
        assert!(matches!(
            find("tomorrow"),
            Err(PromptError::UnknownPrompt(name)) if name == "tomorrow"
        ));
    }
}
