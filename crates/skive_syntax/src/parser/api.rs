/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `skive_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`ParseError`]; nothing is parsed past it.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let program = Parser::new(tokens).parse()?;
    tracing::debug!(statement_count = program.statements.len(), "parsed program");
    Ok(program)
}

/// Parse a token stream holding exactly one expression.
///
/// ## Errors
/// Returns a [`ParseError`] if the expression is malformed or tokens remain after it.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;
    if !parser.is_at_end() {
        return Err(parser.unexpected("expression"));
    }
    Ok(expr)
}
