//! String and character literal scanning.
//!
//! Both literal kinds keep their delimiters and escapes verbatim in the token text. A backslash escapes the
//! next character, whatever it is, so `\"`, `\'` and `\\` never end a literal.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::{LexError, LiteralKind};

impl<'a> Lexer<'a> {
    /// Scan a `"..."` literal; the opening quote has already been consumed.
    pub(super) fn scan_string(&mut self, start: usize) -> Result<(), LexError> {
        let mut escaped = false;
        loop {
            match self.bump() {
                Some('"') if !escaped => break,
                Some('\\') if !escaped => escaped = true,
                Some(_) => escaped = false,
                None => {
                    return Err(LexError::UnterminatedLiteral {
                        kind: LiteralKind::String,
                        span: self.span_from(start),
                    });
                }
            }
        }

        let text = self.text_from(start).to_string();
        self.push(TokenKind::String(text), start);
        Ok(())
    }

    /// Scan a `'c'` literal holding exactly one bare or escaped character.
    pub(super) fn scan_char(&mut self, start: usize) -> Result<(), LexError> {
        let unterminated = |lexer: &Self| LexError::UnterminatedLiteral {
            kind: LiteralKind::Char,
            span: lexer.span_from(start),
        };

        match self.bump() {
            Some('\\') => {
                if self.bump().is_none() {
                    return Err(unterminated(self));
                }
            }
            Some(_) => {}
            None => return Err(unterminated(self)),
        }

        let close_pos = self.pos;
        match self.bump() {
            Some('\'') => {}
            found => {
                let end = close_pos + found.map_or(0, char::len_utf8);
                return Err(LexError::ExpectedCharacter {
                    expected: '\'',
                    found,
                    span: Span::new(close_pos, end),
                });
            }
        }

        let text = self.text_from(start).to_string();
        self.push(TokenKind::Char(text), start);
        Ok(())
    }
}
