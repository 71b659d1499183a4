//! Compiler configuration.
//!
//! Built once by the CLI from its flags and carried inside every
//! [`CompilationContext`](crate::frontend::context::CompilationContext).

use std::path::PathBuf;

use tinyc_syntax::ScanConfig;
use tinyc_syntax::lexer::{DEFAULT_MAX_LINE_LEN, DEFAULT_MAX_NESTING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Longest accepted physical line, terminator excluded.
    pub max_line_len: usize,
    /// Deepest accepted nesting of `(` and `not` inside one expression.
    pub max_nesting: usize,
    /// Trace every buffered source line while scanning.
    pub echo_source: bool,
    /// Print the symbol table report after analysis.
    pub trace_symbols: bool,
    /// Directory receiving backend output; `None` skips code generation.
    pub emit_dir: Option<PathBuf>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_nesting: DEFAULT_MAX_NESTING,
            echo_source: false,
            trace_symbols: false,
            emit_dir: None,
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    pub fn with_echo_source(mut self, echo_source: bool) -> Self {
        self.echo_source = echo_source;
        self
    }

    pub fn with_trace_symbols(mut self, trace_symbols: bool) -> Self {
        self.trace_symbols = trace_symbols;
        self
    }

    pub fn with_emit_dir(mut self, emit_dir: Option<PathBuf>) -> Self {
        self.emit_dir = emit_dir;
        self
    }

    /// The subset of settings the scanner needs.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_line_len: self.max_line_len,
            echo_source: self.echo_source,
            max_nesting: self.max_nesting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompilerConfig::default();
        assert_eq!(config.max_line_len, 255);
        assert_eq!(config.max_nesting, DEFAULT_MAX_NESTING);
        assert!(!config.echo_source);
        assert!(!config.trace_symbols);
        assert!(config.emit_dir.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CompilerConfig::new()
            .with_max_line_len(80)
            .with_echo_source(true)
            .with_trace_symbols(true)
            .with_emit_dir(Some(PathBuf::from("out")));
        assert_eq!(config.max_line_len, 80);
        assert!(config.echo_source);
        assert!(config.trace_symbols);
        assert_eq!(config.emit_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_scan_config_follows_compiler_config() {
        let scan = CompilerConfig::new()
            .with_max_line_len(40)
            .with_max_nesting(8)
            .with_echo_source(true)
            .scan_config();
        assert_eq!(scan.max_line_len, 40);
        assert_eq!(scan.max_nesting, 8);
        assert!(scan.echo_source);
    }
}
