//! Validate command handler
//!
//! Shape-validates a transformation configuration without executing it and
//! reports the structured error list, human-readable or as JSON.

use super::utils::{parse_config, read_source};
use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use remold_core::decode_config;
use tracing::info;

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    info!(config = %args.config.display(), "validating configuration");
    output.info(&format!("Validating configuration: {}", args.config.display()));

    let config = parse_config(&read_source(&args.config)?, &args.config)?;

    match decode_config(&config) {
        Ok(set) => {
            output.success(&format!(
                "✓ configuration is valid ({} transformation(s))",
                set.transformations.len()
            ));
            Ok(())
        }
        Err(errors) => {
            if args.json {
                output.emit(&serde_json::to_string_pretty(&errors)?, None)?;
            } else {
                for error in &errors {
                    output.error(&format!("  - {error}"));
                }
            }
            Err(Error::ConfigInvalid {
                count: errors.len(),
            })
        }
    }
}
