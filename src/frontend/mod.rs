//! tiny compiler frontend
//!
//! - `lexer`: FSM scanner
//! - `parser`: recursive-descent parser producing the AST
//! - `ast`: syntax tree, visitors and outline printer
//! - `diagnostics`: diagnostic records, collector and message catalog
//! - `symbols`: flat symbol table with storage slots
//! - `analyzer`: symbol collection and type checking
//! - `context`: per-compilation state threaded through every phase

// Syntax components are provided by the shared tinyc_syntax crate.
pub use tinyc_syntax::{ast, diagnostics, lexer, parser};

// Compiler-specific pieces remain local.
pub mod analyzer;
pub mod context;
pub mod symbols;
