//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Every command processes its files in order and keeps going after a failing file; the exit code
//! reports whether any file failed.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::{CodeGenerator, CodegenError, NullGenerator};
use crate::config::CompilerConfig;
use crate::frontend::ast::{Program, pretty};
use crate::frontend::context::CompilationContext;
use crate::frontend::diagnostics::print_diagnostic;
use crate::frontend::{lexer, parser};
use crate::pipeline::{CompileFailure, compile_source};

use super::{CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// A source file that could not be loaded.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum SourceError {
    #[error("cannot read '{}'", .path.display())]
    #[diagnostic(code(tinyc::io), help("check that the path exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("source file '{}' is too large ({size} bytes, max {max} bytes)", .path.display())]
    #[diagnostic(code(tinyc::too_large))]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(io_error)?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }
    fs::read_to_string(path).map_err(io_error)
}

/// Print a load failure through miette's graphical handler.
fn report_source_error(err: SourceError) {
    tracing::warn!(error = %err, "skipping file");
    eprintln!("{:?}", miette::Report::new(err));
}

fn exit_code(failed: usize) -> ExitCode {
    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

// ============================================================================
// Debug dumps
// ============================================================================

/// Tokenize files and print one token per line.
pub fn lex_files(files: &[PathBuf], config: &CompilerConfig) -> CliResult<ExitCode> {
    let mut failed = 0;
    for path in files {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                report_source_error(err);
                failed += 1;
                continue;
            }
        };
        let (tokens, diagnostics) = lexer::lex(&source, config.scan_config());
        println!("Tokens of {}:", path.display());
        for token in &tokens {
            println!("{:>8}  {}", token.span.to_string(), token.kind);
        }
        if !diagnostics.is_empty() {
            failed += 1;
            print!("{}", diagnostics);
        }
    }
    Ok(exit_code(failed))
}

/// Parse files and print the AST outline.
pub fn parse_files(files: &[PathBuf], config: &CompilerConfig) -> CliResult<ExitCode> {
    let mut failed = 0;
    for path in files {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                report_source_error(err);
                failed += 1;
                continue;
            }
        };
        let (program, diagnostics) = parser::parse(&source, config.scan_config());
        println!("Syntax tree of {}:", path.display());
        print!("{}", pretty::outline(&program));
        if !diagnostics.is_empty() {
            failed += 1;
            print!("{}", diagnostics);
        }
    }
    Ok(exit_code(failed))
}

// ============================================================================
// Compilation
// ============================================================================

/// Per-run output options that do not affect compilation itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print each diagnostic with its source line after the table.
    pub show_context: bool,
}

/// Result of compiling one file.
#[derive(Debug)]
pub struct FileReport {
    /// Text for stdout: the status line, then the diagnostic table and symbol report as requested.
    pub text: String,
    pub failure: Option<CompileFailure>,
    /// The analyzed program, present when compilation succeeded.
    pub program: Option<Program>,
}

/// Compile one already-loaded source. `ctx` is reset first.
pub fn compile_file(path: &Path, source: &str, ctx: &mut CompilationContext) -> FileReport {
    ctx.reset();
    let result = compile_source(source, ctx);
    let mut text = String::new();

    let (failure, program) = match result {
        Ok(program) => {
            let _ = writeln!(text, "Process File {} success..", path.display());
            (None, Some(program))
        }
        Err(failure) => {
            let _ = writeln!(text, "Process File {} has exceptions:", path.display());
            text.push_str(&ctx.diagnostics.render_table());
            (Some(failure), None)
        }
    };

    // The table only exists once analysis has run.
    if ctx.config.trace_symbols && failure != Some(CompileFailure::Syntax) {
        text.push('\n');
        text.push_str(&ctx.symbols.to_string());
    }

    FileReport {
        text,
        failure,
        program,
    }
}

/// Write the backend artifact for `path` into `dir` as `<stem>.out`.
fn emit(
    dir: &Path,
    path: &Path,
    program: &Program,
    ctx: &CompilationContext,
) -> Result<PathBuf, CodegenError> {
    fs::create_dir_all(dir)?;
    let stem = path.file_stem().map_or_else(|| "out".into(), |s| s.to_string_lossy());
    let target = dir.join(format!("{stem}.out"));
    let mut out = BufWriter::new(fs::File::create(&target)?);
    NullGenerator::new().generate(program, &ctx.symbols, &mut out)?;
    out.flush()?;
    Ok(target)
}

/// Compile every file in order, printing a status report for each.
pub fn compile_files(files: &[PathBuf], config: &CompilerConfig, options: ReportOptions) -> CliResult<ExitCode> {
    let mut ctx = CompilationContext::new(config.clone());
    let mut failed = 0;

    for path in files {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                report_source_error(err);
                failed += 1;
                continue;
            }
        };

        let report = compile_file(path, &source, &mut ctx);
        print!("{}", report.text);

        if let Some(failure) = report.failure {
            failed += 1;
            tracing::info!(file = %path.display(), %failure, errors = ctx.diagnostics.len(), "compilation failed");
            if options.show_context {
                let file_name = path.display().to_string();
                for diagnostic in &ctx.diagnostics {
                    print_diagnostic(&file_name, &source, diagnostic);
                }
            }
            continue;
        }

        if let (Some(dir), Some(program)) = (&config.emit_dir, &report.program) {
            match emit(dir, path, program, &ctx) {
                Ok(target) => tracing::info!(output = %target.display(), "wrote backend output"),
                Err(err) => {
                    failed += 1;
                    eprintln!("error: cannot emit {}: {}", path.display(), err);
                }
            }
        }
    }

    Ok(exit_code(failed))
}
