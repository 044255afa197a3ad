//! Remold CLI - command-line interface for declarative JSON transformation
//!
//! This is the main entry point for the `remold` binary, providing commands
//! for transforming documents, validating transformation configurations, and
//! exporting the configuration schema.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let mut output = OutputWriter::new(cli.quiet, cli.use_color());

    tracing::info!(command = ?cli.command, verbosity = cli.verbosity_level(), "executing command");

    match cli.command {
        Commands::Transform(args) => handlers::handle_transform(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Schema(args) => handlers::handle_schema(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}
