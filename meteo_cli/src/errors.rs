use meteo_core::MeteoError;
use meteo_mcp::ServerError;
use meteo_mcp::prompts::PromptError;
use thiserror::Error;

/// Defines the errors that end a CLI run.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to create async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] MeteoError),
    #[error("{0}")]
    Server(#[from] ServerError),
    #[error("{0}")]
    Prompt(#[from] PromptError),
    #[error("Invalid argument '{0}', expected KEY=VALUE")]
    InvalidArgument(String),
}
