//! Vitatex CLI binary entry point.
//! Delegates to the library for build/lint and maps results to exit codes.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vitatex::cli::{Cli, Commands};
use vitatex::config::RunConfig;
use vitatex::process::SystemRunner;
use vitatex::{compile, output, pipeline};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut runner = SystemRunner;
    match cli.cmd {
        Commands::Build => {
            let cwd = match std::env::current_dir() {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error during compilation: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = compile::run_build(&mut runner, &cwd) {
                eprintln!("Error during compilation: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Commands::Lint => {
            let result = RunConfig::from_env()
                .and_then(|cfg| pipeline::run_pipeline(&mut runner, &cfg));
            match result {
                Ok(None) => {
                    println!("No .tex or .cls files found");
                    ExitCode::SUCCESS
                }
                Ok(Some(report)) => {
                    output::print_summary(&report);
                    if report.summary.has_errors() {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Error processing files: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
