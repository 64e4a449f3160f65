//! Error types for query building and upstream requests.

use thiserror::Error;

/// Defines the errors you might encounter calling an Open-Meteo endpoint.
#[derive(Error, Debug)]
pub enum MeteoError {
    /// A caller-supplied value is outside its documented bounds.
    /// Raised before any request is made.
    #[error("{name} must be between {min} and {max}, got {value}")]
    ParameterRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The upstream API answered with a non-2xx status.
    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A configured endpoint could not be turned into a request URL.
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The upstream answered 2xx but the body was not JSON.
    #[error("Upstream response was not valid JSON: {0}")]
    Decode(String),
}

impl MeteoError {
    /// Whether this error was raised locally, before any network traffic.
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, MeteoError::ParameterRange { .. })
    }

    /// The upstream HTTP status, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MeteoError::UpstreamStatus { status, .. } => Some(*status),
            MeteoError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
