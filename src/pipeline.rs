//! The compile pipeline: scan and parse, then analyze.
//!
//! Every phase records into the caller's [`CompilationContext`]. A phase runs only when the
//! phases before it reported nothing; the first one that fails ends the compilation and is
//! named by the returned [`CompileFailure`]. The diagnostics themselves stay in the context.

use thiserror::Error;
use tinyc_syntax::{Program, parser};

use crate::frontend::analyzer::{self, AnalysisOutcome};
use crate::frontend::context::CompilationContext;

/// Phase that stopped a compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileFailure {
    #[error("lexical or syntax errors")]
    Syntax,
    #[error("symbol table errors")]
    Symbols,
    #[error("type errors")]
    Types,
}

/// Compile one source text against `ctx`.
///
/// `ctx` should be freshly created or [`reset`](CompilationContext::reset); its configuration
/// drives the scanner.
///
/// ## Returns
/// - The analyzed program, every expression carrying its resolved type.
///
/// ## Errors
/// - The [`CompileFailure`] naming the phase that reported diagnostics.
pub fn compile_source(source: &str, ctx: &mut CompilationContext) -> Result<Program, CompileFailure> {
    let mut program = {
        let _span = tracing::info_span!("parse").entered();
        parser::parse_into(source, ctx.config.scan_config(), &mut ctx.diagnostics)
    };
    if ctx.has_errors() {
        tracing::debug!(errors = ctx.diagnostics.len(), "parse failed, skipping analysis");
        return Err(CompileFailure::Syntax);
    }

    let _span = tracing::info_span!("analyze").entered();
    match analyzer::analyze(&mut program, ctx) {
        AnalysisOutcome::Clean => Ok(program),
        AnalysisOutcome::SymbolsFailed => Err(CompileFailure::Symbols),
        AnalysisOutcome::TypesFailed => Err(CompileFailure::Types),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use tinyc_syntax::DiagnosticKind;

    fn context() -> CompilationContext {
        CompilationContext::new(CompilerConfig::default())
    }

    #[test]
    fn test_clean_compile() {
        let mut ctx = context();
        let program = compile_source("int a := 1;\nwrite a", &mut ctx);
        assert!(program.is_ok());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_syntax_errors_suppress_analysis() {
        let mut ctx = context();
        // `y` is undeclared, but the missing `then` stops compilation before analysis.
        let result = compile_source("if y write 1 end", &mut ctx);
        assert_eq!(result, Err(CompileFailure::Syntax));
        assert!(ctx.diagnostics.has_kind(DiagnosticKind::Syntax));
        assert_eq!(ctx.diagnostics.count(DiagnosticKind::Analysis), 0);
    }

    #[test]
    fn test_lexical_errors_suppress_analysis() {
        let mut ctx = context();
        let result = compile_source("int a; a := 1 # 2; write b", &mut ctx);
        assert_eq!(result, Err(CompileFailure::Syntax));
        assert_eq!(ctx.diagnostics.count(DiagnosticKind::Lexical), 1);
        assert_eq!(ctx.diagnostics.count(DiagnosticKind::Analysis), 0);
    }

    #[test]
    fn test_nesting_limit_follows_config() {
        let source = "int a := 1; write ((a))";
        let mut ctx = CompilationContext::new(CompilerConfig::new().with_max_nesting(1));
        assert_eq!(compile_source(source, &mut ctx), Err(CompileFailure::Syntax));
        assert_eq!(ctx.diagnostics.len(), 1);

        let mut ctx = CompilationContext::new(CompilerConfig::new().with_max_nesting(2));
        assert!(compile_source(source, &mut ctx).is_ok());
    }

    #[test]
    fn test_failure_names_the_analysis_pass() {
        let mut ctx = context();
        assert_eq!(compile_source("write x", &mut ctx), Err(CompileFailure::Symbols));
        ctx.reset();
        assert_eq!(compile_source("write not 1", &mut ctx), Err(CompileFailure::Types));
    }

    #[test]
    fn test_reset_context_compiles_next_file_independently() {
        let mut ctx = context();
        assert!(compile_source("int a; a := 'x'", &mut ctx).is_err());
        ctx.reset();
        assert!(compile_source("int a; a := 2", &mut ctx).is_ok());
        assert_eq!(ctx.symbols.lookup("a").map(|e| e.slot), Some(0));
    }

    #[test]
    fn test_recompiling_is_idempotent() {
        let source = "int a := 1; double b; b := a * 2.5; if b > 2 then write b end";
        let mut first = context();
        let mut second = context();
        assert_eq!(compile_source(source, &mut first), compile_source(source, &mut second));
        assert_eq!(first.symbols.to_string(), second.symbols.to_string());
    }
}
