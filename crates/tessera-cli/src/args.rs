//! Command-line argument definitions for the Tessera CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects the conversion; global flags control
//! configuration file selection, strictness and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Tessera diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Fail on skipped lines and dropped edges instead of ignoring them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Conversion to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile diagram source into a laid-out JSON document
    Compile {
        /// Path to the input diagram source
        input: String,

        /// Path to the output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Rewrite diagram source in canonical form
    Format {
        /// Path to the input diagram source
        input: String,

        /// Path to the output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert a JSON document back into diagram source
    Export {
        /// Path to the input JSON document
        input: String,

        /// Path to the output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Command {
    /// Path of the file the command reads.
    pub fn input(&self) -> &str {
        match self {
            Command::Compile { input, .. }
            | Command::Format { input, .. }
            | Command::Export { input, .. } => input,
        }
    }

    /// Path of the file the command writes, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Command::Compile { output, .. }
            | Command::Format { output, .. }
            | Command::Export { output, .. } => output.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "tessera",
            "compile",
            "flow.tess",
            "-o",
            "flow.json",
            "--strict",
            "--log-level",
            "off",
        ])
        .unwrap();

        assert!(args.strict);
        assert_eq!(args.log_level, "off");
        assert_eq!(args.command.input(), "flow.tess");
        assert_eq!(args.command.output(), Some("flow.json"));
    }

    #[test]
    fn test_output_defaults_to_stdout() {
        let args = Args::try_parse_from(["tessera", "export", "doc.json"]).unwrap();
        assert!(matches!(args.command, Command::Export { .. }));
        assert_eq!(args.command.output(), None);
        assert!(!args.strict);
    }
}
