//! Diagnostics shared by the scanner, parser and analyzer.
//!
//! Every phase appends [`Diagnostic`] records to one [`Diagnostics`] collector owned by the
//! compilation in flight. Records are never reordered or removed; later phases ask
//! [`Diagnostics::is_empty`] (or [`Diagnostics::has_kind`]) to decide whether to run.

use std::fmt;

use thiserror::Error;

use crate::ast::Span;

/// Phase that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Analysis,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::Lexical => "LEXICAL_ERROR",
            DiagnosticKind::Syntax => "SYNTAX_ERROR",
            DiagnosticKind::Analysis => "ANALYSIS_ERROR",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Option<Span>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lexical, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, message)
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Analysis, message)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// Append-only, ordered collection of diagnostics for one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = %diagnostic.kind, message = %diagnostic.message, "diagnostic");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    /// Drop every record; used when the owning context moves on to the next file.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render the two-column `ErrorKind` / `Message` report.
    ///
    /// ## Notes
    /// - The kind column is padded to its widest entry (header included).
    /// - No line carries trailing whitespace.
    pub fn render_table(&self) -> String {
        const HEADER: &str = "ErrorKind";
        let width = self
            .entries
            .iter()
            .map(|d| d.kind.as_str().len())
            .chain(std::iter::once(HEADER.len()))
            .max()
            .unwrap_or(HEADER.len());

        let mut out = format!("{:<width$}  Message\n", HEADER);
        for diagnostic in &self.entries {
            let row = format!("{:<width$}  {}", diagnostic.kind, diagnostic.message);
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_table())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Print a diagnostic with its source line and a caret under the reported column.
pub fn print_diagnostic(file_name: &str, source: &str, diagnostic: &Diagnostic) {
    // Color codes
    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    eprintln!(
        "{bold}{red}{kind}{reset}{bold}: {message}{reset}",
        kind = diagnostic.kind,
        message = diagnostic.message,
    );

    if let Some(span) = diagnostic.span {
        eprintln!("  {cyan}-->{reset} {file_name}:{}:{}", span.line, span.column);
        if let Some(line_text) = source.lines().nth(span.line.saturating_sub(1)) {
            let gutter = span.line.to_string().len();
            eprintln!("  {cyan}{:>gutter$} |{reset}", "");
            eprintln!("  {cyan}{:>gutter$} |{reset} {}", span.line, line_text);
            eprintln!(
                "  {cyan}{:>gutter$} |{reset} {}{red}^{reset}",
                "",
                " ".repeat(span.column.saturating_sub(1)),
            );
        }
    }

    for hint in &diagnostic.hints {
        eprintln!("  {cyan}= hint:{reset} {}", hint);
    }
    eprintln!();
}

// ============================================================================
// Error catalog: every message the front end emits
// ============================================================================

pub mod errors {
    use super::*;
    use crate::lexer::TokenKind;
    use tinyc_core::LiteralError;

    // ---- lexical ----

    pub fn illegal_char(c: char, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("illegal character {:?} at {}", c, span)).with_span(span)
    }

    pub fn unterminated_comment(span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("unterminated comment starting at {}", span))
            .with_span(span)
            .with_hint("close the comment with '}'")
    }

    pub fn unterminated_string(span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("unterminated string starting at {}", span))
            .with_span(span)
            .with_hint("string literals must end with ' on the same line")
    }

    /// A `:` or `!` that is not followed by `=`.
    pub fn incomplete_operator(first: char, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("expected '{first}=' at {span}, found '{first}'"))
            .with_span(span)
    }

    pub fn malformed_number(text: &str, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("malformed number '{}' at {}", text, span)).with_span(span)
    }

    pub fn stray_char(c: char, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("unexpected '{}' at {}", c, span)).with_span(span)
    }

    pub fn line_too_long(line: usize, len: usize, max: usize) -> Diagnostic {
        Diagnostic::lexical(format!("line {line} is {len} characters long, the limit is {max}"))
            .with_span(Span::new(line, max + 1))
    }

    // ---- syntax ----

    pub fn unexpected_token(found: &TokenKind, expected: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!(
            "unexpected {} on line {}, expected {}",
            found, span.line, expected
        ))
        .with_span(span)
    }

    pub fn nested_too_deeply(span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("expression nested too deeply on line {}", span.line))
            .with_span(span)
            .with_hint("split the expression with intermediate variables")
    }

    pub fn literal_conversion(err: &LiteralError, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("{} on line {}", err, span.line)).with_span(span)
    }

    // ---- analysis ----

    pub fn redeclared(name: &str, line: usize, first_line: usize) -> Diagnostic {
        Diagnostic::analysis(format!(
            "'{name}' redeclared on line {line} (first declared on line {first_line})"
        ))
    }

    pub fn undeclared(name: &str, line: usize) -> Diagnostic {
        Diagnostic::analysis(format!("'{name}' used before declaration on line {line}"))
            .with_hint(format!("declare it first, e.g. `int {name}`"))
    }

    /// `<construct> check type error on line N: <detail>`
    pub fn type_check(construct: &str, line: usize, detail: impl fmt::Display) -> Diagnostic {
        Diagnostic::analysis(format!("{construct} check type error on line {line}: {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(DiagnosticKind::Lexical.to_string(), "LEXICAL_ERROR");
        assert_eq!(DiagnosticKind::Syntax.to_string(), "SYNTAX_ERROR");
        assert_eq!(DiagnosticKind::Analysis.to_string(), "ANALYSIS_ERROR");
    }

    #[test]
    fn test_collector_counts_by_kind() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        diagnostics.push(Diagnostic::lexical("a"));
        diagnostics.push(Diagnostic::analysis("b"));
        diagnostics.push(Diagnostic::analysis("c"));
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(DiagnosticKind::Analysis), 2);
        assert!(!diagnostics.has_kind(DiagnosticKind::Syntax));
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_render_table() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::syntax("unexpected ';'"));
        diagnostics.push(Diagnostic::analysis("'x' used before declaration on line 2"));
        insta::assert_snapshot!(diagnostics.render_table(), @r"
        ErrorKind       Message
        SYNTAX_ERROR    unexpected ';'
        ANALYSIS_ERROR  'x' used before declaration on line 2
        ");
    }

    #[test]
    fn test_render_table_row_without_message_has_no_trailing_space() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::lexical(""));
        diagnostics.push(Diagnostic::syntax("unexpected ';'"));
        let table = diagnostics.render_table();
        assert!(table.lines().all(|line| line == line.trim_end()), "{table:?}");
        assert!(table.contains("\nLEXICAL_ERROR\n"));
    }

    #[test]
    fn test_render_empty_table_is_header_only() {
        assert_eq!(Diagnostics::new().render_table(), "ErrorKind  Message\n");
    }

    #[test]
    fn test_diagnostic_error_display() {
        let d = Diagnostic::lexical("illegal character '#' at 1:3");
        assert_eq!(d.to_string(), "LEXICAL_ERROR: illegal character '#' at 1:3");
    }

    #[test]
    fn test_builders() {
        let d = errors::undeclared("x", 4);
        assert_eq!(d.kind, DiagnosticKind::Analysis);
        assert_eq!(d.hints.len(), 1);
        let d = errors::illegal_char('#', Span::new(1, 3));
        assert_eq!(d.span, Some(Span::new(1, 3)));
    }
}
