/// Expression parsing.
///
/// Precedence, lowest first:
///
/// ```text
/// expression     → logical_or
/// logical_or     → logical_and    { OR logical_and }*
/// logical_and    → equality       { AND equality }*
/// equality       → relational     { (= | !=) relational }*
/// relational     → additive       { (< | > | <= | >=) additive }*
/// additive       → multiplicative { (+ | -) multiplicative }*
/// multiplicative → factor         { (* | / | %) factor }*
/// factor         → NOT factor | NUM | STRING | TRUE | FALSE | ID | ( expression )
/// ```
///
/// Every `{ op next }*` level goes through [`Parser::binary_chain`].
///
/// Expression parsers return `None` when no node could be built; the reason is already reported.
impl<'src, 'd> Parser<'src, 'd> {
    fn expression(&mut self) -> Option<Expr> {
        self.logical_or()
    }

    fn logical_or(&mut self) -> Option<Expr> {
        self.binary_chain(Self::logical_and, &[OperatorId::Or])
    }

    fn logical_and(&mut self) -> Option<Expr> {
        self.binary_chain(Self::equality, &[OperatorId::And])
    }

    fn equality(&mut self) -> Option<Expr> {
        self.binary_chain(Self::relational, &[OperatorId::Eq, OperatorId::NotEq])
    }

    fn relational(&mut self) -> Option<Expr> {
        self.binary_chain(
            Self::additive,
            &[OperatorId::Lt, OperatorId::Gt, OperatorId::LtEq, OperatorId::GtEq],
        )
    }

    fn additive(&mut self) -> Option<Expr> {
        self.binary_chain(Self::multiplicative, &[OperatorId::Plus, OperatorId::Minus])
    }

    fn multiplicative(&mut self) -> Option<Expr> {
        self.binary_chain(
            Self::factor,
            &[OperatorId::Star, OperatorId::Slash, OperatorId::Percent],
        )
    }

    /// Left-associative chain `operand { op operand }*`.
    ///
    /// Each consumed operator wraps everything parsed so far as its left child, so `a - b - c`
    /// becomes `(a - b) - c`. If one side failed to parse the other side is kept and the chain
    /// continues.
    fn binary_chain(&mut self, operand: fn(&mut Self) -> Option<Expr>, ops: &[OperatorId]) -> Option<Expr> {
        let mut left = operand(self);
        loop {
            let line = self.line();
            let Some(op) = self.match_any_op(ops) else {
                break;
            };
            let right = operand(self);
            left = match (left, right, BinaryOp::from_operator(op)) {
                (Some(l), Some(r), Some(op)) => Some(Expr::binary(op, l, r, line)),
                (l, r, _) => l.or(r),
            };
        }
        left
    }

    fn factor(&mut self) -> Option<Expr> {
        let line = self.line();

        if self.check_op(OperatorId::Not) || self.check_punct(PunctuationId::LParen) {
            if self.depth >= self.max_nesting {
                self.report(errors::nested_too_deeply(self.token.span));
                self.skip_nested_operand();
                return None;
            }
            self.depth += 1;
            let nested = self.nested_factor(line);
            self.depth -= 1;
            return nested;
        }

        match &self.token.kind {
            TokenKind::Num(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::Keyword(KeywordId::True | KeywordId::False) => {}
            _ => {
                self.error_expected("an expression");
                return None;
            }
        }

        let token = self.advance();
        match token.kind {
            TokenKind::Num(text) => self.numeric_literal(&text, token.span),
            TokenKind::Str(text) => Some(Expr::constant(Literal::Str(text), line)),
            TokenKind::Keyword(KeywordId::True) => Some(Expr::constant(Literal::Bool(true), line)),
            TokenKind::Keyword(KeywordId::False) => Some(Expr::constant(Literal::Bool(false), line)),
            TokenKind::Ident(name) => Some(Expr::ident(name, line)),
            _ => None,
        }
    }

    /// `NOT factor` or `( expression )`; the caller accounts for the nesting level.
    fn nested_factor(&mut self, line: usize) -> Option<Expr> {
        if self.match_op(OperatorId::Not) {
            let operand = self.factor()?;
            return Some(Expr::unary(UnaryOp::Not, operand, line));
        }
        self.advance();
        let inner = self.expression();
        self.expect_punct(PunctuationId::RParen, "')'");
        inner
    }

    /// Skip a factor that is nested past the limit without recursing into it.
    ///
    /// Consumes any run of `not`, then either a balanced parenthesized group or a single operand
    /// token. Skipping stops early at `;` or a sequence terminator so the enclosing statement can
    /// still be closed.
    fn skip_nested_operand(&mut self) {
        while self.match_op(OperatorId::Not) {}

        if !self.check_punct(PunctuationId::LParen) {
            if matches!(
                self.token.kind,
                TokenKind::Num(_)
                    | TokenKind::Str(_)
                    | TokenKind::Ident(_)
                    | TokenKind::Keyword(KeywordId::True | KeywordId::False)
            ) {
                self.advance();
            }
            return;
        }

        let mut open = 0usize;
        loop {
            if self.token.kind.ends_sequence() || self.check_punct(PunctuationId::Semicolon) {
                return;
            }
            if self.check_punct(PunctuationId::LParen) {
                open += 1;
            } else if self.check_punct(PunctuationId::RParen) {
                open -= 1;
                if open == 0 {
                    self.advance();
                    return;
                }
            }
            self.advance();
        }
    }

    /// Classify and convert numeric literal text into a constant node.
    ///
    /// A conversion failure is a syntax error and produces no node.
    fn numeric_literal(&mut self, text: &str, span: Span) -> Option<Expr> {
        match NumericLiteral::parse(text) {
            Ok(value) => Some(Expr::constant(Literal::from(value), span.line)),
            Err(err) => {
                self.report(errors::literal_conversion(&err, span));
                None
            }
        }
    }
}
