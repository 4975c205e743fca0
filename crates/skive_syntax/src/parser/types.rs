/// Type-expression parsing methods.
///
/// This chunk parses syntactic type annotations:
/// - Simple names (`int`, `Point`)
/// - Generic applications (`Own<Point>`, `Vec<Own<Point>>`, `Map<K, V,>`)
///
/// ## Notes
/// - `Type` parsing is purely syntactic; the emitter decides what a name lowers to.
/// - `<` and `>` arrive as comparison operator tokens. Nested closers need no special
///   handling because the lexer has no `>>` token.
/// - A `>=` closer (`let v: Vec<int>= e`) is split: `>` ends the list and `=` stays current.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> PResult<Type> {
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.expected("type")),
        };
        self.advance();

        if self.match_op(OperatorId::Lt) {
            let params = self.comma_separated(
                |p| p.check_op(OperatorId::Gt) || p.check_op(OperatorId::GtEq),
                |p| p.type_expr(),
            )?;
            self.close_generic()?;
            Ok(Type::Generic(name, params))
        } else {
            Ok(Type::Simple(name))
        }
    }

    fn close_generic(&mut self) -> PResult<()> {
        if self.check_op(OperatorId::GtEq) {
            let span = self.advance().span;
            self.split_eq = Some(Span::new(span.start + 1, span.end));
            return Ok(());
        }
        self.expect_op(OperatorId::Gt)?;
        Ok(())
    }
}
