//! Pass 1: symbol table construction.

use tinyc_syntax::ast::visit::{walk_expr, walk_stmt};
use tinyc_syntax::ast::{Expr, ExprKind, Stmt, StmtKind, Visitor};
use tinyc_syntax::diagnostics::errors;
use tinyc_syntax::Diagnostics;

use crate::frontend::symbols::SymbolTable;

pub(super) struct SymbolCollector<'a> {
    symbols: &'a mut SymbolTable,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> SymbolCollector<'a> {
    pub(super) fn new(symbols: &'a mut SymbolTable, diagnostics: &'a mut Diagnostics) -> Self {
        Self { symbols, diagnostics }
    }

    fn record_use(&mut self, name: &str, line: usize) {
        if self.symbols.record_use(name, line).is_none() {
            self.diagnostics.push(errors::undeclared(name, line));
        }
    }
}

impl Visitor for SymbolCollector<'_> {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            // Every variable of the list is declared before any initializer is visited.
            StmtKind::Declaration { ty, vars } => {
                for entry in vars {
                    if let Err(existing) = self.symbols.declare(&entry.name, *ty, entry.line) {
                        self.diagnostics
                            .push(errors::redeclared(&entry.name, entry.line, existing.first_line));
                    }
                }
            }
            StmtKind::Assign { target, .. } | StmtKind::Read { target } => self.record_use(target, stmt.line),
            _ => {}
        }
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        if let ExprKind::Ident(name) = &expr.kind {
            self.record_use(name, expr.line);
        }
        walk_expr(self, expr);
    }
}
