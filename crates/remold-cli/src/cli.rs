//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Remold CLI - declarative JSON-to-JSON transformation
///
/// Transform JSON documents with an ordered list of typed transformation
/// steps described in a configuration document, validate configurations,
/// and export the configuration schema.
#[derive(Parser, Debug)]
#[command(
    name = "remold",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform an input document with a transformation configuration
    Transform(TransformArgs),

    /// Validate a transformation configuration against the model
    Validate(ValidateArgs),

    /// Print the JSON Schema of the configuration document
    Schema(SchemaArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the transform command
#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// Input JSON document ('-' for stdin)
    #[arg(value_name = "INPUT", required_unless_present = "interactive")]
    pub input: Option<PathBuf>,

    /// Transformation configuration file (JSON, or YAML by extension; '-' for stdin)
    #[arg(value_name = "CONFIG", required_unless_present = "interactive")]
    pub config: Option<PathBuf>,

    /// Collect the input and configuration documents interactively from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Transformation configuration file (JSON, or YAML by extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Print validation errors as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

impl Cli {
    /// Whether output should be colored
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }

    /// Effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
