/// Statement parsing.
///
/// Grammar:
///
/// ```text
/// statement_sequence → statement { ; statement }*
/// statement          → if_stmt | repeat_stmt | do_while_stmt | assign_stmt
///                    | read_stmt | write_stmt | declaration_stmt
/// if_stmt            → IF expression THEN statement_sequence [ELSE statement_sequence] END
/// repeat_stmt        → REPEAT statement_sequence UNTIL expression
/// do_while_stmt      → DO statement_sequence WHILE expression
/// assign_stmt        → ID := expression
/// read_stmt          → READ ID
/// write_stmt         → WRITE expression
/// declaration_stmt   → Type ID [:= expression] { , ID [:= expression] }*
/// ```
///
/// An `else` always belongs to the innermost open `if`: the nested `if_stmt` reaches its `else`
/// first and claims it.
impl<'src, 'd> Parser<'src, 'd> {
    /// Parse statements until `else`, `end`, `until`, `while` or end of file.
    ///
    /// ## Notes
    /// - `;` separates statements and may also appear right before a terminator.
    /// - An `if` statement needs no separator after its `end`.
    fn statement_sequence(&mut self) -> Vec<Stmt> {
        let mut body = Vec::new();
        while !self.token.kind.ends_sequence() {
            let self_delimited = self.check_keyword(KeywordId::If);
            let Some(stmt) = self.statement() else {
                // the failure is already reported; a dangling separator is not a second one
                self.match_punct(PunctuationId::Semicolon);
                continue;
            };
            body.push(stmt);

            if self.token.kind.ends_sequence() || self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            if !self_delimited {
                self.error_expected("';'");
            }
        }
        body
    }

    /// Parse one statement.
    ///
    /// ## Notes
    /// - A token that cannot start a statement is reported and consumed, so
    ///   `statement_sequence` always makes progress.
    fn statement(&mut self) -> Option<Stmt> {
        if !self.token.kind.starts_statement() {
            self.error_expected("a statement");
            self.advance();
            return None;
        }
        match &self.token.kind {
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::Repeat) => self.repeat_stmt(),
            TokenKind::Keyword(KeywordId::Do) => self.do_while_stmt(),
            TokenKind::Keyword(KeywordId::Read) => self.read_stmt(),
            TokenKind::Keyword(KeywordId::Write) => self.write_stmt(),
            TokenKind::Keyword(id) if id.is_type_name() => self.declaration_stmt(),
            _ => self.assign_stmt(),
        }
    }

    fn if_stmt(&mut self) -> Option<Stmt> {
        let line = self.advance().span.line;
        let condition = self.expression();
        self.expect_keyword(KeywordId::Then, "'then'");
        let then_branch = self.statement_sequence();
        let else_branch = if self.match_keyword(KeywordId::Else) {
            Some(self.statement_sequence())
        } else {
            None
        };
        self.expect_keyword(KeywordId::End, "'end'");
        let stmt = StmtKind::If {
            condition: condition?,
            then_branch,
            else_branch,
        };
        Some(Stmt::new(stmt, line))
    }

    fn repeat_stmt(&mut self) -> Option<Stmt> {
        let line = self.advance().span.line;
        let body = self.statement_sequence();
        self.expect_keyword(KeywordId::Until, "'until'");
        let condition = self.expression()?;
        Some(Stmt::new(StmtKind::Repeat { body, condition }, line))
    }

    fn do_while_stmt(&mut self) -> Option<Stmt> {
        let line = self.advance().span.line;
        let body = self.statement_sequence();
        self.expect_keyword(KeywordId::While, "'while'");
        let condition = self.expression()?;
        Some(Stmt::new(StmtKind::While { body, condition }, line))
    }

    fn assign_stmt(&mut self) -> Option<Stmt> {
        let line = self.line();
        let target = self.expect_ident()?;
        self.expect_op(OperatorId::Assign, "':='");
        let value = self.expression()?;
        Some(Stmt::new(StmtKind::Assign { target, value }, line))
    }

    fn read_stmt(&mut self) -> Option<Stmt> {
        let line = self.advance().span.line;
        let target = self.expect_ident()?;
        Some(Stmt::new(StmtKind::Read { target }, line))
    }

    fn write_stmt(&mut self) -> Option<Stmt> {
        let line = self.advance().span.line;
        let value = self.expression()?;
        Some(Stmt::new(StmtKind::Write { value }, line))
    }

    fn declaration_stmt(&mut self) -> Option<Stmt> {
        let token = self.advance();
        let ty = match token.kind {
            TokenKind::Keyword(id) => ValueType::from_keyword(id),
            _ => None,
        }?;
        let vars = self.variable_list();
        Some(Stmt::new(StmtKind::Declaration { ty, vars }, token.span.line))
    }

    /// `ID [:= expression] { , ID [:= expression] }*`
    fn variable_list(&mut self) -> Vec<VarEntry> {
        let mut vars = Vec::new();
        loop {
            let line = self.line();
            let Some(name) = self.expect_ident() else {
                break;
            };
            let init = if self.match_op(OperatorId::Assign) {
                self.expression()
            } else {
                None
            };
            vars.push(VarEntry { name, init, line });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        vars
    }
}
