/// Expression parsing methods.
///
/// Grammar, loosest first:
///
/// ```text
/// expression := closure | ternary | binary
/// binary     := unary (binop unary)*          precedence from the operator registry
/// unary      := ('-' | 'not') unary | postfix
/// postfix    := primary ('.' ident | '(' args ')' | '[' expression ']')*
/// primary    := hex | int ('.' int?)? | float | char | string | ident | '(' expression ')'
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> PResult<Expr> {
        match self.peek().kind.keyword_id() {
            Some(KeywordId::Fn) => self.closure(),
            Some(KeywordId::If) => self.ternary(),
            _ => self.binary(),
        }
    }

    /// `fn ([captures])? (params) (-> type)? (do stmts end | => expr)`
    fn closure(&mut self) -> PResult<Expr> {
        self.expect_keyword(KeywordId::Fn)?;

        let captures = if self.match_punct(PunctuationId::LBracket) {
            let names = self.comma_separated(|p| p.check_punct(PunctuationId::RBracket), |p| p.identifier())?;
            self.expect_punct(PunctuationId::RBracket)?;
            Some(names)
        } else {
            None
        };
        let params = self.params()?;
        let return_type = self.return_type()?;

        let body = if self.match_keyword(KeywordId::Do) {
            let body = self.statements()?;
            self.expect_keyword(KeywordId::End)?;
            ClosureBody::Block(body)
        } else if self.match_punct(PunctuationId::FatArrow) {
            ClosureBody::Expr(self.expression()?)
        } else {
            return Err(self.expected("'do' or '=>'"));
        };

        Ok(Expr::Closure(Box::new(ClosureExpr {
            captures,
            params,
            return_type,
            body,
        })))
    }

    /// `if cond then expr else expr`
    fn ternary(&mut self) -> PResult<Expr> {
        self.expect_keyword(KeywordId::If)?;
        let condition = self.expression()?;
        self.expect_keyword(KeywordId::Then)?;
        let then_expr = self.expression()?;
        self.expect_keyword(KeywordId::Else)?;
        let else_expr = self.expression()?;
        Ok(Expr::Ternary(Box::new(TernaryExpr {
            condition,
            then_expr,
            else_expr,
        })))
    }

    /// Binary operator chain, resolved with an explicit operand/operator stack.
    ///
    /// `pending` holds each left operand paired with the operator that follows it; `current` is
    /// the rightmost operand. Before an incoming operator is pushed, every pending operator that
    /// binds at least as tightly is reduced, which makes equal-precedence runs left-associative.
    fn binary(&mut self) -> PResult<Expr> {
        let mut pending: Vec<(Expr, BinaryOp)> = Vec::new();
        let mut current = self.unary()?;

        while let Some(op) = self.binary_op() {
            self.advance();
            let right = self.unary()?;

            while let Some((_, top)) = pending.last() {
                if top.precedence() < op.precedence() {
                    break;
                }
                if let Some((left, top)) = pending.pop() {
                    current = Expr::binary(left, top, current);
                }
            }

            pending.push((current, op));
            current = right;
        }

        while let Some((left, op)) = pending.pop() {
            current = Expr::binary(left, op, current);
        }
        Ok(current)
    }

    /// The binary operator at the cursor, if any; word operators arrive as keywords.
    fn binary_op(&self) -> Option<BinaryOp> {
        self.peek().kind.binary_operator_id().and_then(BinaryOp::from_operator)
    }

    fn unary(&mut self) -> PResult<Expr> {
        if self.match_op(OperatorId::Minus) {
            Ok(Expr::Unary(UnaryOp::Neg, Box::new(self.unary()?)))
        } else if self.match_keyword(KeywordId::Not) {
            Ok(Expr::Unary(UnaryOp::Not, Box::new(self.unary()?)))
        } else {
            self.postfix()
        }
    }

    /// Member access, calls and indexing, attached in the order written.
    fn postfix(&mut self) -> PResult<Expr> {
        let mut expr = self.primary()?;
        loop {
            if self.match_punct(PunctuationId::Dot) {
                let field = self.identifier()?;
                expr = Expr::Member(Box::new(expr), field);
            } else if self.match_punct(PunctuationId::LParen) {
                let args = self.comma_separated(|p| p.check_punct(PunctuationId::RParen), |p| p.expression())?;
                self.expect_punct(PunctuationId::RParen)?;
                expr = Expr::Call(Box::new(expr), args);
            } else if self.match_punct(PunctuationId::LBracket) {
                let index = self.expression()?;
                self.expect_punct(PunctuationId::RBracket)?;
                expr = Expr::Index(Box::new(expr), Box::new(index));
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> PResult<Expr> {
        let token = self.peek();
        let expr = match &token.kind {
            TokenKind::Hex(text) => Expr::Literal(Literal::Hex(text.clone())),
            TokenKind::Float(text) => Expr::Literal(Literal::Float(text.clone())),
            TokenKind::Int(text) => {
                self.advance();
                return Ok(self.int_or_split_float(text));
            }
            TokenKind::Char(text) => Expr::Literal(Literal::Char(text.clone())),
            TokenKind::String(text) => Expr::Literal(Literal::String(text.clone())),
            TokenKind::Ident(name) => Expr::Ident(name.clone()),
            TokenKind::Keyword(id) => {
                return Err(ParseError::ReservedWordAsIdentifier {
                    word: keywords::as_str(*id).to_string(),
                    span: token.span,
                });
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen)?;
                return Ok(inner);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.advance();
        Ok(expr)
    }

    /// An integer token, or the `int '.' int?` spelling of a float the lexer left split (`3.`).
    fn int_or_split_float(&mut self, whole: &str) -> Expr {
        if !self.match_punct(PunctuationId::Dot) {
            return Expr::Literal(Literal::Int(whole.to_string()));
        }
        let mut text = format!("{whole}.");
        if let TokenKind::Int(fraction) = &self.peek().kind {
            text.push_str(fraction);
            self.advance();
        }
        Expr::Literal(Literal::Float(text))
    }
}
