/// Recursive-descent parser state.
///
/// `token` is the single lookahead token. The parser borrows the diagnostics collector of the
/// compilation it belongs to.
pub struct Parser<'src, 'd> {
    scanner: Scanner<'src>,
    token: Token,
    diagnostics: &'d mut Diagnostics,
    /// Open `(` and `not` levels around the factor being parsed.
    depth: usize,
    max_nesting: usize,
}

impl<'src, 'd> Parser<'src, 'd> {
    /// Create a parser and read the first lookahead token.
    pub fn new(mut scanner: Scanner<'src>, diagnostics: &'d mut Diagnostics) -> Self {
        let token = next_significant(&mut scanner, diagnostics);
        let max_nesting = scanner.config().max_nesting;
        Self {
            scanner,
            token,
            diagnostics,
            depth: 0,
            max_nesting,
        }
    }

    /// Parse the whole input.
    ///
    /// ## Notes
    /// - A sequence terminator with no enclosing construct (`end`, `else`, `until`, `while` at top
    ///   level) is reported, consumed, and parsing resumes after it.
    pub fn parse(mut self) -> Program {
        let mut body = Vec::new();
        loop {
            body.extend(self.statement_sequence());
            if self.is_at_end() {
                break;
            }
            self.error_expected("a statement");
            self.advance();
        }
        tracing::debug!(statements = body.len(), "parsed program");
        Program { body }
    }
}

/// Next token that is not a scanner-reported [`TokenKind::Error`].
fn next_significant(scanner: &mut Scanner<'_>, diagnostics: &mut Diagnostics) -> Token {
    loop {
        let token = scanner.next_token(diagnostics);
        if token.kind != TokenKind::Error {
            return token;
        }
    }
}
