//! Tokenizer for Skive source text.
//!
//! One left-to-right pass over the source produces typed tokens:
//! - reserved words (`if`, `while`, `fn`, `struct`, `let`, `and`, `or`, `not`, ...) and identifiers
//! - int, float, hex, char and string literals (see `numbers` and `strings`)
//! - operators and punctuation, with two-character compounds (`+=`, `->`, `<=`, `=>`, ...)
//!
//! `//` and `/* */` comments and all whitespace (newlines included) produce nothing: statements are
//! delimited by keywords only. The first malformed character aborts the pass with a [`LexError`].

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id, spellings};

use crate::ast::Span;
use crate::diagnostics::LexError;
use skive_core::lang::operators::OperatorId;
use skive_core::lang::punctuation::PunctuationId;

/// Single-pass tokenizer over a borrowed source string.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Consume the lexer and return every token, terminated by exactly one `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.bump() {
            let start = self.pos - c.len_utf8();
            self.scan_token(c, start)?;
        }
        let end = self.source.len();
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        Ok(self.tokens)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        let hit = self.peek() == Some(expected);
        if hit {
            self.pos += expected.len_utf8();
        }
        hit
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Source text from `start` up to the cursor.
    fn text_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let span = self.span_from(start);
        self.tokens.push(Token::new(kind, span));
    }

    /// `c` has been consumed and starts at byte `start`.
    fn scan_token(&mut self, c: char, start: usize) -> Result<(), LexError> {
        match c {
            ' ' | '\t' | '\n' | '\r' => {}
            '/' if matches!(self.peek(), Some('/' | '*')) => self.skip_comment(start)?,
            '"' => self.scan_string(start)?,
            '\'' => self.scan_char(start)?,
            '0'..='9' => self.scan_number(start, c),
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(start),
            c => {
                let kind = self
                    .symbol(c)
                    .ok_or(LexError::IllegalCharacter { ch: c, span: self.span_from(start) })?;
                self.push(kind, start);
            }
        }
        Ok(())
    }

    /// Operator or punctuation starting with `c`; the longest two-character form wins.
    fn symbol(&mut self, c: char) -> Option<TokenKind> {
        use OperatorId as O;
        use PunctuationId as P;

        let compound = match (c, self.peek()) {
            ('+', Some('=')) => Some(TokenKind::Operator(O::PlusEq)),
            ('-', Some('=')) => Some(TokenKind::Operator(O::MinusEq)),
            ('-', Some('>')) => Some(TokenKind::Punctuation(P::Arrow)),
            ('*', Some('=')) => Some(TokenKind::Operator(O::StarEq)),
            ('<', Some('=')) => Some(TokenKind::Operator(O::LtEq)),
            ('>', Some('=')) => Some(TokenKind::Operator(O::GtEq)),
            ('=', Some('=')) => Some(TokenKind::Operator(O::EqEq)),
            ('=', Some('>')) => Some(TokenKind::Punctuation(P::FatArrow)),
            ('!', Some('=')) => Some(TokenKind::Operator(O::NotEq)),
            _ => None,
        };
        if compound.is_some() {
            self.bump();
            return compound;
        }

        let kind = match c {
            '+' => TokenKind::Operator(O::Plus),
            '-' => TokenKind::Operator(O::Minus),
            '*' => TokenKind::Operator(O::Star),
            '/' => TokenKind::Operator(O::Slash),
            '%' => TokenKind::Operator(O::Percent),
            '<' => TokenKind::Operator(O::Lt),
            '>' => TokenKind::Operator(O::Gt),
            '=' => TokenKind::Operator(O::Eq),
            '!' => TokenKind::Punctuation(P::Bang),
            '(' => TokenKind::Punctuation(P::LParen),
            ')' => TokenKind::Punctuation(P::RParen),
            '[' => TokenKind::Punctuation(P::LBracket),
            ']' => TokenKind::Punctuation(P::RBracket),
            '{' => TokenKind::Punctuation(P::LBrace),
            '}' => TokenKind::Punctuation(P::RBrace),
            '.' => TokenKind::Punctuation(P::Dot),
            ',' => TokenKind::Punctuation(P::Comma),
            ':' => TokenKind::Punctuation(P::Colon),
            '&' => TokenKind::Punctuation(P::Ampersand),
            _ => return None,
        };
        Some(kind)
    }

    /// Skip a comment whose leading `/` is consumed and whose second character is next.
    fn skip_comment(&mut self, start: usize) -> Result<(), LexError> {
        if self.eat('/') {
            self.eat_while(|c| c != '\n');
            return Ok(());
        }

        self.eat('*');
        while let Some(c) = self.bump() {
            if c == '*' && self.eat('/') {
                return Ok(());
            }
        }
        Err(LexError::UnterminatedComment {
            span: Span::new(start, start + 2),
        })
    }

    /// Identifier or reserved word.
    fn scan_word(&mut self, start: usize) {
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = self.text_from(start);
        let kind = match keyword_id(word) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(word.to_string()),
        };
        self.push(kind, start);
    }
}

/// Tokenize `source`; shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}
