use std::io;

use tinyc_syntax::ast::visit::{walk_expr, walk_stmt};
use tinyc_syntax::ast::{Expr, Stmt, Visitor};
use tinyc_syntax::Program;

use super::{CodeGenerator, CodegenError};
use crate::frontend::symbols::SymbolTable;

/// Backend that validates its input and emits nothing.
///
/// It walks the whole tree, counting statements and rejecting any expression the analyzer left
/// unresolved, then flushes `out` without writing to it.
#[derive(Debug, Default)]
pub struct NullGenerator {
    statements: usize,
    unresolved: Option<usize>,
}

impl NullGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements seen by the last [`generate`](CodeGenerator::generate) call.
    pub fn statements(&self) -> usize {
        self.statements
    }
}

impl Visitor for NullGenerator {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.statements += 1;
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        if expr.ty.is_none() && self.unresolved.is_none() {
            self.unresolved = Some(expr.line);
        }
        walk_expr(self, expr);
    }
}

impl CodeGenerator for NullGenerator {
    fn generate(
        &mut self,
        program: &Program,
        symbols: &SymbolTable,
        out: &mut dyn io::Write,
    ) -> Result<(), CodegenError> {
        self.statements = 0;
        self.unresolved = None;
        self.visit_program(program);
        if let Some(line) = self.unresolved {
            return Err(CodegenError::Unresolved { line });
        }
        tracing::debug!(statements = self.statements, variables = symbols.len(), "null backend");
        out.flush()?;
        Ok(())
    }
}
