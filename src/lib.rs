#![forbid(unsafe_code)]
//! tinyc: compiler front end for the tiny teaching language.
//!
//! Source text goes through a finite-state scanner, an LL(1) recursive-descent parser and a
//! two-pass semantic analyzer (symbol table, then type check). Every phase records problems in
//! one ordered diagnostics collector owned by a [`CompilationContext`]; a phase only runs when
//! the ones before it were clean. A program that passes analysis can be handed to a
//! [`CodeGenerator`](backend::CodeGenerator).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Problems in the compiled
//!   program are never panics; they are diagnostics. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod pipeline;
pub mod version;

pub use frontend::analyzer;
pub use frontend::ast;
pub use frontend::context::CompilationContext;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;

pub use backend::{CodeGenerator, CodegenError, NullGenerator};
pub use config::CompilerConfig;
pub use pipeline::{CompileFailure, compile_source};
