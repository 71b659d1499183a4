//! Pass 2: type resolution and checking.
//!
//! Children are resolved before their parent, so every hook below starts by walking.

use tinyc_core::{ValueType, promote};
use tinyc_syntax::ast::visit::{walk_expr_mut, walk_stmt_mut};
use tinyc_syntax::ast::{BinaryOp, Expr, ExprKind, OpClass, Stmt, StmtKind, UnaryOp, VisitorMut};
use tinyc_syntax::diagnostics::errors;
use tinyc_syntax::Diagnostics;

use crate::frontend::symbols::SymbolTable;

const VARIABLE_LIST: &str = "variable_list statement";
const ASSIGN: &str = "assign statement";
const IF: &str = "if statement";
const LOOP: &str = "loop statement";
const LOGICAL_NOT: &str = "logical-not expression";
const ARITHMETIC: &str = "arithmetic expression";
const LOGICAL_AND_OR: &str = "logical-and-or expression";
const COMPARISON: &str = "comparison expression";

pub(super) struct TypeChecker<'a> {
    symbols: &'a SymbolTable,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> TypeChecker<'a> {
    pub(super) fn new(symbols: &'a SymbolTable, diagnostics: &'a mut Diagnostics) -> Self {
        Self { symbols, diagnostics }
    }

    fn declared_type(&self, name: &str) -> ValueType {
        self.symbols.lookup(name).map_or(ValueType::Void, |entry| entry.ty)
    }

    fn unary_type(&mut self, op: UnaryOp, operand: ValueType, line: usize) -> ValueType {
        match (op, operand) {
            (_, ValueType::Void) => ValueType::Void,
            (UnaryOp::Not, ValueType::Boolean) => ValueType::Boolean,
            (UnaryOp::Not, found) => {
                self.diagnostics.push(errors::type_check(
                    LOGICAL_NOT,
                    line,
                    format!("'{op}' expects a bool operand, found {found}"),
                ));
                ValueType::Void
            }
        }
    }

    fn binary_type(&mut self, op: BinaryOp, left: ValueType, right: ValueType, line: usize) -> ValueType {
        if left.is_void() || right.is_void() {
            return ValueType::Void;
        }
        let (resolved, construct, expected) = match op.class() {
            OpClass::Arithmetic => (
                left.as_numeric()
                    .zip(right.as_numeric())
                    .map(|(l, r)| ValueType::from(promote(l, r))),
                ARITHMETIC,
                "numeric",
            ),
            OpClass::Comparison => (
                (left.is_numeric() && right.is_numeric()).then_some(ValueType::Boolean),
                COMPARISON,
                "numeric",
            ),
            OpClass::Logical => (
                (left == ValueType::Boolean && right == ValueType::Boolean).then_some(ValueType::Boolean),
                LOGICAL_AND_OR,
                "bool",
            ),
        };
        resolved.unwrap_or_else(|| {
            self.diagnostics.push(errors::type_check(
                construct,
                line,
                format!("'{op}' expects {expected} operands, found {left} and {right}"),
            ));
            ValueType::Void
        })
    }

    /// Report a value of type `found` stored into `name` of type `declared`, unless either side
    /// already failed.
    fn check_store(&mut self, construct: &str, name: &str, declared: ValueType, found: ValueType, line: usize) {
        if declared.is_void() || found.is_void() || declared.accepts(found) {
            return;
        }
        self.diagnostics.push(errors::type_check(
            construct,
            line,
            format!("cannot store {found} into {declared} variable '{name}'"),
        ));
    }

    fn check_condition(&mut self, construct: &str, condition: &Expr) {
        let found = condition.resolved();
        if found.is_void() || found == ValueType::Boolean {
            return;
        }
        self.diagnostics.push(errors::type_check(
            construct,
            condition.line,
            format!("condition must be bool, found {found}"),
        ));
    }
}

impl VisitorMut for TypeChecker<'_> {
    fn visit_stmt_mut(&mut self, stmt: &mut Stmt) {
        walk_stmt_mut(self, stmt);
        match &stmt.kind {
            StmtKind::Declaration { ty, vars } => {
                for entry in vars {
                    if let Some(init) = &entry.init {
                        self.check_store(VARIABLE_LIST, &entry.name, *ty, init.resolved(), entry.line);
                    }
                }
            }
            StmtKind::Assign { target, value } => {
                let declared = self.declared_type(target);
                self.check_store(ASSIGN, target, declared, value.resolved(), stmt.line);
            }
            StmtKind::If { condition, .. } => self.check_condition(IF, condition),
            StmtKind::Repeat { condition, .. } | StmtKind::While { condition, .. } => {
                self.check_condition(LOOP, condition)
            }
            // Any resolved operand can be written; a Void one was already reported.
            StmtKind::Write { .. } | StmtKind::Read { .. } => {}
        }
    }

    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        walk_expr_mut(self, expr);
        let ty = match &expr.kind {
            ExprKind::Const(literal) => expr.ty.unwrap_or_else(|| literal.value_type()),
            ExprKind::Ident(name) => self.declared_type(name),
            ExprKind::Unary { op, operand } => self.unary_type(*op, operand.resolved(), expr.line),
            ExprKind::Binary { op, left, right } => {
                self.binary_type(*op, left.resolved(), right.resolved(), expr.line)
            }
        };
        expr.ty = Some(ty);
    }
}
