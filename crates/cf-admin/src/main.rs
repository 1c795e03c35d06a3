//! cf-admin - ClarityFlow administration CLI
//!
//! ```bash
//! # Create everything that is missing in the configured Appwrite project
//! cf-admin setup all
//!
//! # Progress report for a sprint as of a given day
//! cf-admin sprint stats 65f1c0e2a9b84d7c --today 2026-03-07
//!
//! # Roadmap edges as JSON
//! cf-admin --json roadmap deps 65f1c0e2b1c34e8a
//! ```

use cf_admin::{Cli, logger, run};
use cf_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) =
        logger::initialize(config.logging.level, config.log_file_path(), config.logging.colored)
    {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    if let Err(e) = config.validate_admin() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, &config).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
