//! Per-compilation state.
//!
//! A [`CompilationContext`] owns everything one in-flight compilation mutates: the diagnostics
//! collector and the symbol table (which also owns the storage-slot counter). It is passed
//! explicitly through every phase. Compiling several files in sequence reuses one context with
//! [`CompilationContext::reset`] between files; compiling in parallel needs one context per task.

use tinyc_syntax::Diagnostics;

use crate::config::CompilerConfig;
use crate::frontend::symbols::SymbolTable;

#[derive(Debug, Clone, Default)]
pub struct CompilationContext {
    pub diagnostics: Diagnostics,
    pub symbols: SymbolTable,
    pub config: CompilerConfig,
}

impl CompilationContext {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            diagnostics: Diagnostics::new(),
            symbols: SymbolTable::new(),
            config,
        }
    }

    /// Drop all diagnostics and symbols, keeping the configuration.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.symbols.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_core::ValueType;
    use tinyc_syntax::Diagnostic;

    #[test]
    fn test_reset_clears_state_but_keeps_config() {
        let mut ctx = CompilationContext::new(CompilerConfig::new().with_max_line_len(12));
        ctx.diagnostics.push(Diagnostic::analysis("boom"));
        ctx.symbols.declare("a", ValueType::Integer, 1).ok();
        assert!(ctx.has_errors());

        ctx.reset();
        assert!(!ctx.has_errors());
        assert!(ctx.symbols.is_empty());
        assert_eq!(ctx.config.max_line_len, 12);
        assert_eq!(ctx.symbols.declare("b", ValueType::Integer, 1), Ok(0));
    }
}
