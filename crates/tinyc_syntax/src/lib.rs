//! Syntax front end for the tiny teaching language: tokens, FSM scanner, AST, LL(1) parser and
//! the diagnostics collector shared by every phase.
//!
//! ## Examples
//!
//! ```rust
//! use tinyc_syntax::lexer::ScanConfig;
//! use tinyc_syntax::parser;
//!
//! let (program, diagnostics) = parser::parse("int x := 1; write x", ScanConfig::default());
//! assert!(diagnostics.is_empty());
//! assert_eq!(program.body.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use ast::{Program, Span};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use lexer::{ScanConfig, Scanner, Token, TokenKind};
