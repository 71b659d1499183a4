//! CLI module for the tiny compiler
//!
//! ## Usage
//!
//! - `tinyc <FILES>...` - compile each file, printing a status line and, on failure, the
//!   diagnostic table
//! - `tinyc --lex <FILES>...` - tokenize only (debug)
//! - `tinyc --parse <FILES>...` - parse only and print the AST outline (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! Exit codes: 0 when every file compiled, 1 when any file failed, 2 for usage errors (reported
//! by clap).

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::CompilerConfig;
use crate::frontend::lexer::{DEFAULT_MAX_LINE_LEN, DEFAULT_MAX_NESTING};
use crate::version::TINYC_VERSION;
use commands::ReportOptions;

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
#[derive(Debug)]
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compiler front end for the tiny teaching language
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(version = TINYC_VERSION)]
#[command(about = "Compiler front end for the tiny teaching language", long_about = None)]
pub struct Cli {
    /// Source files, compiled in order
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", conflicts_with = "parse")]
    pub lex: bool,

    /// Parse only and print the syntax tree (debug)
    #[arg(long = "parse")]
    pub parse: bool,

    /// Print the symbol table report after analysis
    #[arg(long = "symbols")]
    pub symbols: bool,

    /// Trace every source line as it is scanned (visible with RUST_LOG=trace)
    #[arg(long = "echo-source")]
    pub echo_source: bool,

    /// Print each diagnostic with its source line
    #[arg(long = "context")]
    pub context: bool,

    /// Longest accepted source line
    #[arg(long = "max-line-length", value_name = "N", default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_length: usize,

    /// Deepest accepted nesting of `(` and `not` in one expression
    #[arg(long = "max-nesting", value_name = "N", default_value_t = DEFAULT_MAX_NESTING)]
    pub max_nesting: usize,

    /// Run the backend and write `<stem>.out` files into DIR
    #[arg(long = "emit-dir", value_name = "DIR")]
    pub emit_dir: Option<PathBuf>,
}

impl Cli {
    /// Compiler configuration selected by the flags.
    pub fn config(&self) -> CompilerConfig {
        CompilerConfig::new()
            .with_max_line_len(self.max_line_length)
            .with_max_nesting(self.max_nesting)
            .with_echo_source(self.echo_source)
            .with_trace_symbols(self.symbols)
            .with_emit_dir(self.emit_dir.clone())
    }
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
    if cli.max_line_length == 0 {
        return Err(CliError::new("--max-line-length must be at least 1", ExitCode(2)));
    }
    let config = cli.config();
    tracing::debug!(?config, files = cli.files.len(), "starting");

    // Handle debug flags first
    if cli.lex {
        return commands::lex_files(&cli.files, &config);
    }
    if cli.parse {
        return commands::parse_files(&cli.files, &config);
    }
    commands::compile_files(
        &cli.files,
        &config,
        ReportOptions {
            show_context: cli.context,
        },
    )
}

// ============================================================================
// Tests
// ============================================================================
