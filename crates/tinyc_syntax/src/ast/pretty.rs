//! Indented outline of a [`Program`], one node per line.
//!
//! Used by `--parse` debug output and by snapshot tests. Expressions show their resolved type once
//! the analyzer has written it.

use std::fmt::{self, Write};

use super::{Expr, ExprKind, Program, Stmt, StmtKind};

/// Render the whole program as an outline.
pub fn outline(program: &Program) -> String {
    let mut out = String::new();
    let mut printer = Printer { out: &mut out };
    for stmt in &program.body {
        // Writing into a String cannot fail.
        let _ = printer.stmt(stmt, 0);
    }
    out
}

struct Printer<'a> {
    out: &'a mut String,
}

impl Printer<'_> {
    fn line(&mut self, depth: usize, text: fmt::Arguments<'_>) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}", "", text, indent = depth * 2)
    }

    fn block(&mut self, label: &str, body: &[Stmt], depth: usize) -> fmt::Result {
        self.line(depth, format_args!("{label}"))?;
        for stmt in body {
            self.stmt(stmt, depth + 1)?;
        }
        Ok(())
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) -> fmt::Result {
        let line = stmt.line;
        match &stmt.kind {
            StmtKind::Declaration { ty, vars } => {
                self.line(depth, format_args!("Declaration {ty} [line {line}]"))?;
                for var in vars {
                    self.line(depth + 1, format_args!("Var {} [line {}]", var.name, var.line))?;
                    if let Some(init) = &var.init {
                        self.expr(init, depth + 2)?;
                    }
                }
            }
            StmtKind::Assign { target, value } => {
                self.line(depth, format_args!("Assign {target} [line {line}]"))?;
                self.expr(value, depth + 1)?;
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(depth, format_args!("If [line {line}]"))?;
                self.expr(condition, depth + 1)?;
                self.block("Then", then_branch, depth + 1)?;
                if let Some(else_branch) = else_branch {
                    self.block("Else", else_branch, depth + 1)?;
                }
            }
            StmtKind::Repeat { body, condition } => {
                self.line(depth, format_args!("Repeat [line {line}]"))?;
                self.block("Body", body, depth + 1)?;
                self.line(depth + 1, format_args!("Until"))?;
                self.expr(condition, depth + 2)?;
            }
            StmtKind::While { body, condition } => {
                self.line(depth, format_args!("While [line {line}]"))?;
                self.block("Body", body, depth + 1)?;
                self.line(depth + 1, format_args!("Condition"))?;
                self.expr(condition, depth + 2)?;
            }
            StmtKind::Read { target } => {
                self.line(depth, format_args!("Read {target} [line {line}]"))?;
            }
            StmtKind::Write { value } => {
                self.line(depth, format_args!("Write [line {line}]"))?;
                self.expr(value, depth + 1)?;
            }
        }
        Ok(())
    }

    fn expr(&mut self, expr: &Expr, depth: usize) -> fmt::Result {
        let label = match &expr.kind {
            ExprKind::Unary { op, .. } => format!("Unary {op}"),
            ExprKind::Binary { op, .. } => format!("Binary {op}"),
            ExprKind::Const(lit) => format!("Const {lit}"),
            ExprKind::Ident(name) => format!("Ident {name}"),
        };
        match expr.ty {
            Some(ty) => self.line(depth, format_args!("{label} [line {}] : {ty}", expr.line))?,
            None => self.line(depth, format_args!("{label} [line {}]", expr.line))?,
        }
        match &expr.kind {
            ExprKind::Unary { operand, .. } => self.expr(operand, depth + 1),
            ExprKind::Binary { left, right, .. } => {
                self.expr(left, depth + 1)?;
                self.expr(right, depth + 1)
            }
            ExprKind::Const(_) | ExprKind::Ident(_) => Ok(()),
        }
    }
}
