//! Output formatting and writing utilities
//!
//! Status messages go to stderr (suppressed by `--quiet`) so that document
//! output on stdout can be piped; transformation results are written via
//! [`OutputWriter::emit`] to stdout or a file.

use crate::error::Result;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writer for status messages and result payloads
pub struct OutputWriter {
    quiet: bool,
    use_color: bool,
}

impl OutputWriter {
    pub fn new(quiet: bool, use_color: bool) -> Self {
        Self { quiet, use_color }
    }

    /// Informational status line on stderr
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Success status line on stderr
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }

    /// Error detail line on stderr (never suppressed)
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message);
        }
    }

    /// Write a result payload to the target file, or stdout when `None`
    pub fn emit(&self, payload: &str, target: Option<&Path>) -> Result<()> {
        match target {
            Some(path) => {
                fs::write(path, format!("{payload}\n"))?;
                self.info(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(payload.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
