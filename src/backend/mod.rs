//! Code generation contract.
//!
//! A backend receives a program that passed analysis (every expression carries its resolved
//! type) together with the symbol table that assigned storage slots, and writes its artifact to
//! the given handle. Only the [`NullGenerator`] exists for now.

mod null;

pub use null::NullGenerator;

use std::io;

use thiserror::Error;
use tinyc_syntax::Program;

use crate::frontend::symbols::SymbolTable;

/// Failure while producing a backend artifact.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    /// The program reached the backend with an expression left unresolved.
    #[error("expression on line {line} has no resolved type")]
    Unresolved { line: usize },
}

pub trait CodeGenerator {
    /// Emit `program` into `out`.
    ///
    /// ## Errors
    /// - [`CodegenError::Io`] if writing to `out` fails.
    fn generate(
        &mut self,
        program: &Program,
        symbols: &SymbolTable,
        out: &mut dyn io::Write,
    ) -> Result<(), CodegenError>;
}
