//! AST traversal.
//!
//! [`Visitor`] walks a tree by shared reference, [`VisitorMut`] by mutable reference. Every
//! `visit_*` hook defaults to the matching `walk_*` function, which recurses into children in
//! source order. Override a hook and do work *before* calling `walk_*` for a pre-order pass, or
//! *after* it for a post-order pass.

use super::{Expr, ExprKind, Program, Stmt, StmtKind, VarEntry};

// ============================================================================
// Shared-reference visitor
// ============================================================================

pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_var_entry(&mut self, entry: &VarEntry) {
        walk_var_entry(self, entry);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for stmt in &program.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Declaration { vars, .. } => {
            for entry in vars {
                visitor.visit_var_entry(entry);
            }
        }
        StmtKind::Assign { value, .. } | StmtKind::Write { value } => visitor.visit_expr(value),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(condition);
            for stmt in then_branch {
                visitor.visit_stmt(stmt);
            }
            for stmt in else_branch.iter().flatten() {
                visitor.visit_stmt(stmt);
            }
        }
        StmtKind::Repeat { body, condition } | StmtKind::While { body, condition } => {
            for stmt in body {
                visitor.visit_stmt(stmt);
            }
            visitor.visit_expr(condition);
        }
        StmtKind::Read { .. } => {}
    }
}

pub fn walk_var_entry<V: Visitor + ?Sized>(visitor: &mut V, entry: &VarEntry) {
    if let Some(init) = &entry.init {
        visitor.visit_expr(init);
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        ExprKind::Const(_) | ExprKind::Ident(_) => {}
    }
}

// ============================================================================
// Mutable visitor
// ============================================================================

pub trait VisitorMut {
    fn visit_program_mut(&mut self, program: &mut Program) {
        walk_program_mut(self, program);
    }

    fn visit_stmt_mut(&mut self, stmt: &mut Stmt) {
        walk_stmt_mut(self, stmt);
    }

    fn visit_var_entry_mut(&mut self, entry: &mut VarEntry) {
        walk_var_entry_mut(self, entry);
    }

    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        walk_expr_mut(self, expr);
    }
}

pub fn walk_program_mut<V: VisitorMut + ?Sized>(visitor: &mut V, program: &mut Program) {
    for stmt in &mut program.body {
        visitor.visit_stmt_mut(stmt);
    }
}

pub fn walk_stmt_mut<V: VisitorMut + ?Sized>(visitor: &mut V, stmt: &mut Stmt) {
    match &mut stmt.kind {
        StmtKind::Declaration { vars, .. } => {
            for entry in vars {
                visitor.visit_var_entry_mut(entry);
            }
        }
        StmtKind::Assign { value, .. } | StmtKind::Write { value } => visitor.visit_expr_mut(value),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr_mut(condition);
            for stmt in then_branch {
                visitor.visit_stmt_mut(stmt);
            }
            for stmt in else_branch.iter_mut().flatten() {
                visitor.visit_stmt_mut(stmt);
            }
        }
        StmtKind::Repeat { body, condition } | StmtKind::While { body, condition } => {
            for stmt in body {
                visitor.visit_stmt_mut(stmt);
            }
            visitor.visit_expr_mut(condition);
        }
        StmtKind::Read { .. } => {}
    }
}

pub fn walk_var_entry_mut<V: VisitorMut + ?Sized>(visitor: &mut V, entry: &mut VarEntry) {
    if let Some(init) = &mut entry.init {
        visitor.visit_expr_mut(init);
    }
}

pub fn walk_expr_mut<V: VisitorMut + ?Sized>(visitor: &mut V, expr: &mut Expr) {
    match &mut expr.kind {
        ExprKind::Unary { operand, .. } => visitor.visit_expr_mut(operand),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr_mut(left);
            visitor.visit_expr_mut(right);
        }
        ExprKind::Const(_) | ExprKind::Ident(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Literal};
    use tinyc_core::ValueType;

    fn sample() -> Program {
        let sum = Expr::binary(
            BinaryOp::Add,
            Expr::ident("a", 2),
            Expr::constant(Literal::Int(1), 2),
            2,
        );
        Program {
            body: vec![
                Stmt::new(
                    StmtKind::Declaration {
                        ty: ValueType::Integer,
                        vars: vec![VarEntry {
                            name: "a".into(),
                            init: None,
                            line: 1,
                        }],
                    },
                    1,
                ),
                Stmt::new(StmtKind::Write { value: sum }, 2),
            ],
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit_stmt(&mut self, stmt: &Stmt) {
            self.events.push(stmt.kind.name().to_string());
            walk_stmt(self, stmt);
        }

        fn visit_expr(&mut self, expr: &Expr) {
            walk_expr(self, expr);
            let label = match &expr.kind {
                ExprKind::Binary { op, .. } => op.to_string(),
                ExprKind::Ident(name) => name.clone(),
                ExprKind::Const(lit) => lit.to_string(),
                ExprKind::Unary { op, .. } => op.to_string(),
            };
            self.events.push(label);
        }
    }

    #[test]
    fn test_pre_and_post_order_hooks() {
        let mut recorder = Recorder::default();
        recorder.visit_program(&sample());
        // statements pre-order, expressions post-order
        assert_eq!(recorder.events, vec!["Declaration", "Write", "a", "1", "+"]);
    }

    struct Stamp;

    impl VisitorMut for Stamp {
        fn visit_expr_mut(&mut self, expr: &mut Expr) {
            walk_expr_mut(self, expr);
            if expr.ty.is_none() {
                expr.ty = Some(ValueType::Void);
            }
        }
    }

    #[test]
    fn test_mut_visitor_reaches_every_expression() {
        let mut program = sample();
        Stamp.visit_program_mut(&mut program);
        let StmtKind::Write { value } = &program.body[1].kind else {
            panic!("expected write");
        };
        assert_eq!(value.ty, Some(ValueType::Void));
        let ExprKind::Binary { left, right, .. } = &value.kind else {
            panic!("expected binary");
        };
        assert_eq!(left.ty, Some(ValueType::Void));
        // constants keep their parse-time type
        assert_eq!(right.ty, Some(ValueType::Integer));
    }
}
