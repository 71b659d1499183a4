//! Abstract syntax tree for the tiny language.
//!
//! Statement sequences are plain `Vec<Stmt>` on the construct that owns them (program body, branch,
//! loop body). Children are strictly syntactic sub-parts.
//!
//! Expressions carry a resolved type slot: `None` until the analyzer writes it, except constants,
//! whose type is known when they are parsed.

use std::fmt;

use tinyc_core::lang::operators::OperatorId;
use tinyc_core::{NumericLiteral, ValueType};

pub mod pretty;
pub mod visit;

pub use visit::{Visitor, VisitorMut};

/// Source position (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub type Ident = String;

/// A whole source file: one top-level statement sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Self { kind, line }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `int a := 1, b`
    Declaration { ty: ValueType, vars: Vec<VarEntry> },
    /// `x := expr`
    Assign { target: Ident, value: Expr },
    /// `if cond then ... [else ...] end`
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    /// `repeat ... until cond`
    Repeat { body: Vec<Stmt>, condition: Expr },
    /// `do ... while cond`
    While { body: Vec<Stmt>, condition: Expr },
    /// `read x`
    Read { target: Ident },
    /// `write expr`
    Write { value: Expr },
}

impl StmtKind {
    /// Short node name used in outlines and traces.
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Declaration { .. } => "Declaration",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::If { .. } => "If",
            StmtKind::Repeat { .. } => "Repeat",
            StmtKind::While { .. } => "While",
            StmtKind::Read { .. } => "Read",
            StmtKind::Write { .. } => "Write",
        }
    }
}

/// One declared identifier within a declaration, with its optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarEntry {
    pub name: Ident,
    pub init: Option<Expr>,
    pub line: usize,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: usize,
    /// Resolved type; `None` is the unresolved sentinel.
    pub ty: Option<ValueType>,
}

impl Expr {
    pub fn new(kind: ExprKind, line: usize) -> Self {
        Self { kind, line, ty: None }
    }

    /// A constant, typed at construction.
    pub fn constant(literal: Literal, line: usize) -> Self {
        let ty = Some(literal.value_type());
        Self {
            kind: ExprKind::Const(literal),
            line,
            ty,
        }
    }

    pub fn ident(name: impl Into<Ident>, line: usize) -> Self {
        Self::new(ExprKind::Ident(name.into()), line)
    }

    pub fn unary(op: UnaryOp, operand: Expr, line: usize) -> Self {
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            line,
        )
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, line: usize) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            line,
        )
    }

    /// The resolved type, treating the unresolved sentinel as `Void`.
    pub fn resolved(&self) -> ValueType {
        self.ty.unwrap_or(ValueType::Void)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    Const(Literal),
    Ident(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl Literal {
    pub fn value_type(&self) -> ValueType {
        match self {
            Literal::Int(_) => ValueType::Integer,
            Literal::Float(_) => ValueType::Float,
            Literal::Double(_) => ValueType::Double,
            Literal::Bool(_) => ValueType::Boolean,
            Literal::Str(_) => ValueType::String,
        }
    }
}

impl From<NumericLiteral> for Literal {
    fn from(lit: NumericLiteral) -> Self {
        match lit {
            NumericLiteral::Int(v) => Literal::Int(v),
            NumericLiteral::Float(v) => Literal::Float(v),
            NumericLiteral::Double(v) => Literal::Double(v),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{:?}f", v),
            Literal::Double(v) => write!(f, "{:?}", v),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Str(s) => write!(f, "'{}'", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "not"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Logical
    Or,
    And,
    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// Semantic family of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    Logical,
    Comparison,
    Arithmetic,
}

impl BinaryOp {
    /// Map an infix operator token to its AST operator.
    pub fn from_operator(id: OperatorId) -> Option<BinaryOp> {
        let op = match id {
            OperatorId::Or => BinaryOp::Or,
            OperatorId::And => BinaryOp::And,
            OperatorId::Eq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            OperatorId::Assign | OperatorId::Not => return None,
        };
        Some(op)
    }

    pub fn class(self) -> OpClass {
        match self {
            BinaryOp::Or | BinaryOp::And => OpClass::Logical,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::LtEq
            | BinaryOp::GtEq => OpClass::Comparison,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
                OpClass::Arithmetic
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Or => write!(f, "or"),
            BinaryOp::And => write!(f, "and"),
            BinaryOp::Eq => write!(f, "="),
            BinaryOp::NotEq => write!(f, "!="),
            BinaryOp::Lt => write!(f, "<"),
            BinaryOp::Gt => write!(f, ">"),
            BinaryOp::LtEq => write!(f, "<="),
            BinaryOp::GtEq => write!(f, ">="),
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
            BinaryOp::Mod => write!(f, "%"),
        }
    }
}
