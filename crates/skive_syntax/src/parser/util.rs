/// Miscellaneous parser utilities.
///
/// Identifier parsing and the comma-separated list helper shared by fields, parameters,
/// arguments, captures and generic parameters.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Parse an identifier. Reserved words get their own error instead of a generic mismatch.
    fn identifier(&mut self) -> PResult<Ident> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name.clone())
            }
            TokenKind::Keyword(id) => Err(ParseError::ReservedWordAsIdentifier {
                word: keywords::as_str(*id).to_string(),
                span: token.span,
            }),
            _ => Err(self.expected("identifier")),
        }
    }

    /// Parse `item (, item)* ,?` up to (but not including) a closing token.
    ///
    /// `is_close` decides whether the current token ends the list; an empty list is allowed.
    fn comma_separated<T>(
        &mut self,
        is_close: impl Fn(&Self) -> bool,
        mut item: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        let mut items = Vec::new();
        while !is_close(self) {
            items.push(item(self)?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(items)
    }
}
