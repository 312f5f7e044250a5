//! Tessera CLI library
//!
//! This module contains the core CLI logic for the Tessera diagram tool.

pub mod error_adapter;
pub mod strict;

mod args;
mod config;

pub use args::{Args, Command};
pub use config::ConfigError;

use std::{
    fs,
    io::{self, Write as _},
};

use log::{info, warn};
use thiserror::Error;

use tessera::{DiagramBuilder, TesseraError};

use strict::{Issue, collect_issues};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tessera(#[from] TesseraError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Skipped lines or dropped edges found with `--strict`.
    #[error("{} problem(s) found in {path}", .issues.len())]
    Strict {
        path: String,
        src: String,
        issues: Vec<Issue>,
    },
}

/// Run the Tessera CLI application
///
/// Reads the command's input file, converts it and writes the result to the
/// output file, or to stdout when none is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON documents
/// - Invalid layout settings
/// - Skipped lines or dropped edges when `--strict` is set
pub fn run(args: &Args) -> Result<(), CliError> {
    let input = args.command.input();
    info!(
        input_path = input,
        output_path:? = args.command.output();
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    let content = fs::read_to_string(input).map_err(TesseraError::Io)?;

    let output = match &args.command {
        Command::Compile { .. } => {
            let compiled = builder.compile(&content)?;
            check_strict(args, input, &content, &compiled)?;
            builder.to_json(compiled.graph())?
        }
        Command::Format { .. } => {
            let parsed = builder.parse(&content);
            check_strict(args, input, &content, &parsed)?;
            builder.serialize(parsed.graph())
        }
        Command::Export { .. } => {
            let graph = builder.from_json(&content)?;
            builder.serialize(&graph)
        }
    };

    write_output(args.command.output(), &output)?;
    info!(output_path:? = args.command.output(); "Diagram written");

    Ok(())
}

/// Fails with [`CliError::Strict`] if strict mode is on and anything was let go.
fn check_strict(
    args: &Args,
    path: &str,
    src: &str,
    compiled: &tessera::Compiled,
) -> Result<(), CliError> {
    if compiled.is_clean() {
        return Ok(());
    }

    if !args.strict {
        warn!(
            skipped = compiled.skipped().len(),
            dropped = compiled.unresolved().len();
            "Some input was ignored, rerun with --strict for details"
        );
        return Ok(());
    }

    Err(CliError::Strict {
        path: path.to_string(),
        src: src.to_string(),
        issues: collect_issues(compiled),
    })
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), TesseraError> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
