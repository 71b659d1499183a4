/// Token-stream helpers.
///
/// The `expect_*` family implements the grammar's `match(expected)` primitive: on a mismatch it
/// reports a syntax error and does **not** consume anything, so one missing token does not drag
/// the parser past unrelated input.
impl<'src, 'd> Parser<'src, 'd> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.token.kind.is_eof()
    }

    fn line(&self) -> usize {
        self.token.span.line
    }

    /// Consume the lookahead and return it.
    fn advance(&mut self) -> Token {
        if self.is_at_end() {
            return self.token.clone();
        }
        let next = next_significant(&mut self.scanner, self.diagnostics);
        std::mem::replace(&mut self.token, next)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.token.kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.token.kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.token.kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the lookahead if it is one of `ops`.
    fn match_any_op(&mut self, ops: &[OperatorId]) -> Option<OperatorId> {
        let op = self.token.kind.operator().filter(|op| ops.contains(op))?;
        self.advance();
        Some(op)
    }

    fn expect_keyword(&mut self, id: KeywordId, what: &str) -> bool {
        if self.match_keyword(id) {
            true
        } else {
            self.error_expected(what);
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> bool {
        if self.match_punct(id) {
            true
        } else {
            self.error_expected(what);
            false
        }
    }

    fn expect_op(&mut self, id: OperatorId, what: &str) -> bool {
        if self.match_op(id) {
            true
        } else {
            self.error_expected(what);
            false
        }
    }

    /// Consume an identifier and return its name.
    fn expect_ident(&mut self) -> Option<String> {
        if !matches!(self.token.kind, TokenKind::Ident(_)) {
            self.error_expected("an identifier");
            return None;
        }
        match self.advance().kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    // ========================================================================
    // Error reporting
    // ========================================================================

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn error_expected(&mut self, what: &str) {
        let diagnostic = errors::unexpected_token(&self.token.kind, what, self.token.span);
        self.report(diagnostic);
    }
}
