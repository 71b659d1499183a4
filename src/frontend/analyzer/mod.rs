//! Semantic analysis for tiny programs.
//!
//! Analysis runs in two passes over a parsed [`Program`], both recording into the
//! [`CompilationContext`] they are given:
//!
//! 1. **Symbol collection** ([`collect`]), a pre-order walk. Declarations insert their variables
//!    into the symbol table; every assignment target, `read` target and identifier expression
//!    records its line against the existing entry.
//! 2. **Type checking** ([`check`]), a post-order walk. Every expression gets a resolved type and
//!    every statement is checked against the types of its parts.
//!
//! The second pass only runs when the first reported nothing. Within a pass errors accumulate:
//! a failing node is typed `Void` and the walk continues, so one run reports every problem in the
//! file. Nodes consuming a `Void` operand stay silent, so each mistake is reported once.
//!
//! ## Examples
//!
//! ```rust
//! use tinyc::config::CompilerConfig;
//! use tinyc::frontend::analyzer::{AnalysisOutcome, Analyzer};
//! use tinyc::frontend::context::CompilationContext;
//! use tinyc::frontend::parser;
//!
//! let mut ctx = CompilationContext::new(CompilerConfig::default());
//! let mut program = parser::parse_into("int a := 1; write a + 2.5", ctx.config.scan_config(), &mut ctx.diagnostics);
//! assert_eq!(Analyzer::new(&mut ctx).analyze(&mut program), AnalysisOutcome::Clean);
//! ```

mod check;
mod collect;


use tinyc_syntax::ast::{Program, Visitor, VisitorMut};

use crate::frontend::context::CompilationContext;
use check::TypeChecker;
use collect::SymbolCollector;

/// Which pass, if any, reported problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Symbol collection reported errors; type checking was skipped.
    SymbolsFailed,
    /// Symbols were consistent but type checking reported errors.
    TypesFailed,
    Clean,
}

impl AnalysisOutcome {
    pub fn is_clean(self) -> bool {
        self == AnalysisOutcome::Clean
    }
}

/// Runs both analysis passes against one compilation context.
pub struct Analyzer<'ctx> {
    ctx: &'ctx mut CompilationContext,
}

impl<'ctx> Analyzer<'ctx> {
    pub fn new(ctx: &'ctx mut CompilationContext) -> Self {
        Self { ctx }
    }

    /// Collect symbols, then (if that was clean) resolve and check types in place.
    ///
    /// Only diagnostics added by this call count towards the outcome.
    pub fn analyze(&mut self, program: &mut Program) -> AnalysisOutcome {
        let before = self.ctx.diagnostics.len();

        let CompilationContext {
            diagnostics, symbols, ..
        } = &mut *self.ctx;

        SymbolCollector::new(symbols, diagnostics).visit_program(program);
        let collected = diagnostics.len() - before;
        tracing::debug!(symbols = symbols.len(), errors = collected, "symbol collection finished");
        if collected > 0 {
            return AnalysisOutcome::SymbolsFailed;
        }

        TypeChecker::new(symbols, diagnostics).visit_program_mut(program);
        let checked = diagnostics.len() - before;
        tracing::debug!(errors = checked, "type checking finished");
        if checked > 0 {
            AnalysisOutcome::TypesFailed
        } else {
            AnalysisOutcome::Clean
        }
    }
}

/// Analyze `program` against `ctx`. See [`Analyzer::analyze`].
#[tracing::instrument(skip_all, fields(statements = program.body.len()))]
pub fn analyze(program: &mut Program, ctx: &mut CompilationContext) -> AnalysisOutcome {
    Analyzer::new(ctx).analyze(program)
}
