/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
type PResult<T> = Result<T, ParseError>;

/// Stand-in for the end of a token stream that was built without a trailing `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span { start: 0, end: 0 },
};

/// The `=` half of a `>=` that closed a generic argument list.
static SPLIT_EQ_TOKEN: Token = Token {
    kind: TokenKind::Operator(OperatorId::Eq),
    span: Span { start: 0, end: 0 },
};

/// Parser state.
///
/// ## Notes
/// - The cursor only moves forward. Statement dispatch needs one token of lookahead and the
///   expression grammar is prefix-deterministic, so nothing is ever unwound.
/// - Parsing stops at the first error (no recovery or synchronization).
/// - `Vec<int>= v` lexes its closer as `>=`. The type parser consumes it and leaves the
///   `=` behind in `split_eq`, which then reads as the current token.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    split_eq: Option<Span>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `skive_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            split_eq: None,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered. A stray `end` or `else` after the last
    /// top-level statement is reported as [`ParseError::UnexpectedToken`].
    pub fn parse(mut self) -> PResult<Program> {
        let statements = self.statements()?;
        if !self.is_at_end() {
            return Err(self.unexpected("program"));
        }
        Ok(Program { statements })
    }
}
