//! Transform command handler
//!
//! Reads the input and configuration documents, validates the configuration,
//! runs the engine, and writes the transformed document. Also implements the
//! interactive mode, where both documents are collected line by line from
//! stdin and terminated by an empty line.

use super::utils::{is_stdin, parse_config, parse_json, read_source};
use crate::cli::TransformArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use remold_core::{decode_config, transform_decoded};
use serde_json::Value;
use std::io::{self, BufRead};
use tracing::{debug, info};

/// Handle the transform command
pub fn handle_transform(args: TransformArgs, output: &mut OutputWriter) -> Result<()> {
    if args.interactive {
        return run_interactive(&args, output);
    }

    let (Some(input_path), Some(config_path)) = (args.input.as_ref(), args.config.as_ref())
    else {
        return Err(Error::invalid_args(
            "INPUT and CONFIG are required unless --interactive is given",
        ));
    };
    if is_stdin(input_path) && is_stdin(config_path) {
        return Err(Error::invalid_args(
            "only one of INPUT and CONFIG can be read from stdin",
        ));
    }

    info!(input = %input_path.display(), config = %config_path.display(), "transforming");

    let input = parse_json(&read_source(input_path)?, input_path)?;
    let config = parse_config(&read_source(config_path)?, config_path)?;

    let result = run_transform(&input, &config)?;

    output.emit(&render(&result, args.compact)?, args.output.as_deref())?;
    Ok(())
}

fn run_transform(input: &Value, config: &Value) -> Result<Value> {
    let set = decode_config(config).map_err(|errors| remold_core::Error::InvalidConfig { errors })?;
    debug!(steps = set.transformations.len(), "configuration decoded");
    Ok(transform_decoded(input, &set)?)
}

fn render(document: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(document)?
    } else {
        serde_json::to_string_pretty(document)?
    };
    Ok(rendered)
}

fn run_interactive(args: &TransformArgs, output: &mut OutputWriter) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    output.info("Enter the input JSON document (finish with an empty line):");
    let input_block = read_block(&mut reader)?;
    let input: Value = serde_json::from_str(&input_block)?;

    output.info("Enter the transformation configuration (finish with an empty line):");
    let config_block = read_block(&mut reader)?;
    let config: Value = serde_json::from_str(&config_block)?;

    let result = run_transform(&input, &config)?;

    output.info("Transformed document:");
    output.emit(&render(&result, args.compact)?, args.output.as_deref())?;
    Ok(())
}

/// Collect lines until an empty line or end of input
fn read_block(reader: &mut impl BufRead) -> Result<String> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            break;
        }
        lines.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
    Ok(lines.join("\n"))
}
