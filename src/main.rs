use std::process::ExitCode;

use clap::Parser;
use wordhash::cli::humanize::HumanizeCommandOutput;
use wordhash::cli::uuid::UuidCommandOutput;
use wordhash::cli::{Cli, Commands};
use wordhash::error::WordhashError;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let serialized = serde_json::to_string_pretty(&error.to_error_response()).unwrap_or_else(
                |_| {
                    "{\"error\":{\"type\":\"serialization_error\",\"message\":\"Failed to serialize error response\"}}"
                        .to_string()
                },
            );
            println!("{serialized}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, WordhashError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Humanize(args) => match wordhash::cli::humanize::run_humanize(args)? {
            HumanizeCommandOutput::Text(output) => Ok(output),
            HumanizeCommandOutput::Json(response) => serde_json::to_string_pretty(&response)
                .map_err(|source| WordhashError::ResponseSerialization { source }),
        },
        Commands::Uuid(args) => match wordhash::cli::uuid::run_uuid(args)? {
            UuidCommandOutput::Text(output) => Ok(output),
            UuidCommandOutput::Json(response) => serde_json::to_string_pretty(&response)
                .map_err(|source| WordhashError::ResponseSerialization { source }),
        },
    }
}
