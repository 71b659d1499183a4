//! LL(1) recursive-descent parser for the tiny language.
//!
//! Pulls tokens from a [`Scanner`] one at a time (one token of lookahead, no backtracking) and builds
//! a [`Program`]. Syntax errors go into the caller's [`Diagnostics`]; the parser always returns a
//! tree, possibly missing the nodes that failed to parse.
//!
//! ## Examples
//!
//! ```rust
//! use tinyc_syntax::ast::StmtKind;
//! use tinyc_syntax::lexer::ScanConfig;
//! use tinyc_syntax::parser;
//!
//! let (program, diagnostics) = parser::parse("if true then write 1 end", ScanConfig::default());
//! assert!(diagnostics.is_empty());
//! assert!(matches!(program.body[0].kind, StmtKind::If { .. }));
//! ```

use crate::ast::*;
use crate::diagnostics::{Diagnostic, Diagnostics, errors};
use crate::lexer::{ScanConfig, Scanner, Token, TokenKind};
use tinyc_core::NumericLiteral;
use tinyc_core::lang::keywords::KeywordId;
use tinyc_core::lang::operators::OperatorId;
use tinyc_core::lang::punctuation::PunctuationId;
use tinyc_core::ValueType;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
