/// Cursor and token-matching primitives.
///
/// `check_*` looks at the current token, `match_*` consumes it on a hit, and `expect_*` consumes it or
/// reports what was expected. Errors always point at the current token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// The current token; a stream without a trailing `Eof` reads as if it had one.
    fn peek(&self) -> &'a Token {
        if self.split_eq.is_some() {
            return &SPLIT_EQ_TOKEN;
        }
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Source span of the current token.
    fn peek_span(&self) -> Span {
        self.split_eq.unwrap_or(self.peek().span)
    }

    /// Consume and return the current token. The cursor never moves past `Eof`.
    fn advance(&mut self) -> &'a Token {
        if self.split_eq.take().is_some() {
            return &SPLIT_EQ_TOKEN;
        }
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Return `true` at a token that closes a statement list.
    fn at_block_end(&self) -> bool {
        self.is_at_end() || self.check_keyword(KeywordId::End) || self.check_keyword(KeywordId::Else)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        self.advance_if(self.check_keyword(id))
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        self.advance_if(self.check_punct(id))
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        self.advance_if(self.check_op(id))
    }

    fn expect_keyword(&mut self, id: KeywordId) -> PResult<&'a Token> {
        self.advance_or_expected(self.check_keyword(id), keywords::as_str(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> PResult<&'a Token> {
        self.advance_or_expected(self.check_punct(id), punctuation::as_str(id))
    }

    fn expect_op(&mut self, id: OperatorId) -> PResult<&'a Token> {
        self.advance_or_expected(self.check_op(id), operators::as_str(id))
    }

    fn advance_if(&mut self, hit: bool) -> bool {
        if hit {
            self.advance();
        }
        hit
    }

    fn advance_or_expected(&mut self, hit: bool, spelling: &str) -> PResult<&'a Token> {
        if hit {
            Ok(self.advance())
        } else {
            Err(self.expected(format!("'{spelling}'")))
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    fn expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::ExpectedToken {
            expected: expected.into(),
            found: self.peek().kind.clone(),
            span: self.peek_span(),
        }
    }

    fn unexpected(&self, context: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.peek().kind.clone(),
            context,
            span: self.peek_span(),
        }
    }
}
