mod cli;
mod commands;
mod errors;

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};

use cli::{MeteoCli, MeteoCliCommand};

fn main() -> ExitCode {
    let cli = MeteoCli::parse();
    initialize_logging(cli.verbose);
    debug!("Parsed arguments: {:?}", cli);

    let result = match &cli.command {
        None => commands::serve(&cli.serve),
        Some(MeteoCliCommand::Prompt { name, arguments }) => {
            commands::render_prompt(name, arguments)
        }
        Some(MeteoCliCommand::Prompts) => commands::list_prompts(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs always go to stderr; stdout carries the stdio transport.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}
