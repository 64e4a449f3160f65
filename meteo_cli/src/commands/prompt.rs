//! Prompt commands.

use meteo_mcp::prompts::{self, PROMPTS};
use serde_json::{Map, Value};

use crate::errors::CliError;

/// Render a prompt from `KEY=VALUE` arguments and print it.
pub fn render_prompt(name: &str, arguments: &[String]) -> Result<(), CliError> {
    let spec = prompts::find(name)?;
    let values = parse_arguments(arguments)?;
    println!("{}", spec.render(Some(&values))?);
    Ok(())
}

/// Print every prompt with its arguments.
pub fn list_prompts() -> Result<(), CliError> {
    for spec in PROMPTS {
        let arguments: Vec<String> = spec
            .arguments
            .iter()
            .map(|arg| {
                if arg.required {
                    arg.name.to_string()
                } else {
                    format!("[{}]", arg.name)
                }
            })
            .collect();
        println!("{} {}", spec.name, arguments.join(" "));
        println!("    {}", spec.description);
    }
    Ok(())
}

fn parse_arguments(arguments: &[String]) -> Result<Map<String, Value>, CliError> {
    arguments
        .iter()
        .map(|argument| {
            let (key, value) = argument
                .split_once('=')
                .ok_or_else(|| CliError::InvalidArgument(argument.clone()))?;
            Ok((key.trim().to_string(), Value::String(value.to_string())))
        })
        .collect()
}
