//! CLI module for errloom
//!
//! ## Commands
//!
//! - `parse <file>` - Parse a synapseware template and list its spans (`--json` for JSON)
//! - `check <file>` - Parse and print a summary of turns, samplers, resets and variables
//! - `fmt <file|dir>` - Format synapseware templates
//! - `lang` - Print the marker and delimiter reference as Markdown
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::ERRLOOM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Synapseware template tooling for errloom
#[derive(Parser, Debug)]
#[command(name = "errloom")]
#[command(version = ERRLOOM_VERSION)]
#[command(about = "Parse, check and format synapseware conversation templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Template to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the comment-filtered source (debug)
    #[arg(long = "filter", value_name = "FILE", conflicts_with = "file")]
    pub filter_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a template and list its spans
    Parse {
        /// Template file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit spans as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a template and summarize it
    Check {
        /// Template file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format synapseware templates
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
        /// Run tags and text together without blank lines
        #[arg(long)]
        compact: bool,
    },

    /// Print the marker and delimiter reference (Markdown)
    Lang,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.filter_file {
        return commands::filter_file(&file);
    }

    match cli.command {
        Some(Command::Parse { file, json }) => commands::parse_file(&file, json),
        Some(Command::Check { file }) => commands::check_file(&file),
        Some(Command::Fmt {
            path,
            check,
            diff,
            compact,
        }) => commands::format_files(&path, check, diff, compact),
        Some(Command::Lang) => commands::print_reference(),
        None => {
            if let Some(file) = cli.file {
                commands::check_file(&file)
            } else {
                Err(CliError::failure("No template given; run `errloom --help` for usage"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
