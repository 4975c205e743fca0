//! Syntax diagnostics.
//!
//! Both stages fail fast: the first problem becomes the returned error and scanning or parsing stops.
//! Spans are byte ranges into the source so an embedding tool can render them with miette.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Which quoted literal was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Char,
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralKind::String => write!(f, "string"),
            LiteralKind::Char => write!(f, "character"),
        }
    }
}

/// Errors raised by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("illegal character '{ch}'")]
    #[diagnostic(code(skive::lex::illegal_character))]
    IllegalCharacter {
        ch: char,
        #[label("not part of the language")]
        span: Span,
    },

    #[error("unterminated {kind} literal")]
    #[diagnostic(code(skive::lex::unterminated_literal))]
    UnterminatedLiteral {
        kind: LiteralKind,
        #[label("literal starts here")]
        span: Span,
    },

    #[error("unterminated block comment")]
    #[diagnostic(code(skive::lex::unterminated_comment), help("close the comment with `*/`"))]
    UnterminatedComment {
        #[label("comment starts here")]
        span: Span,
    },

    #[error("expected '{expected}', found {}", describe_char(.found))]
    #[diagnostic(code(skive::lex::expected_character))]
    ExpectedCharacter {
        expected: char,
        found: Option<char>,
        #[label("here")]
        span: Span,
    },
}

fn describe_char(c: &Option<char>) -> String {
    match *c {
        Some(c) => format!("'{}'", c.escape_default()),
        None => "end of input".to_string(),
    }
}

/// Errors raised by the statement and expression parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected {expected}, found {}", .found.describe())]
    #[diagnostic(code(skive::parse::expected_token))]
    ExpectedToken {
        /// Human-readable description of what would have been accepted, e.g. `'else' or 'end'`.
        expected: String,
        found: TokenKind,
        #[label("unexpected token")]
        span: Span,
    },

    #[error("'{word}' is a reserved word and cannot be used as an identifier")]
    #[diagnostic(code(skive::parse::reserved_word))]
    ReservedWordAsIdentifier {
        word: String,
        #[label("reserved word")]
        span: Span,
    },

    #[error("unexpected {} in {context}", .found.describe())]
    #[diagnostic(code(skive::parse::unexpected_token))]
    UnexpectedToken {
        found: TokenKind,
        context: &'static str,
        #[label("no rule starts with this token")]
        span: Span,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_token_message_names_found_token() {
        let err = ParseError::ExpectedToken {
            expected: "'else' or 'end'".to_string(),
            found: TokenKind::Ident("c".to_string()),
            span: Span::new(3, 4),
        };
        assert_eq!(err.to_string(), "expected 'else' or 'end', found 'c'");
    }

    #[test]
    fn test_unexpected_eof_message() {
        let err = ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            context: "expression",
            span: Span::new(9, 9),
        };
        assert_eq!(err.to_string(), "unexpected end of input in expression");
    }

    #[test]
    fn test_reserved_word_message() {
        let err = ParseError::ReservedWordAsIdentifier {
            word: "end".to_string(),
            span: Span::new(0, 3),
        };
        assert!(err.to_string().contains("'end' is a reserved word"));
    }

    #[test]
    fn test_lex_error_messages() {
        let err = LexError::ExpectedCharacter {
            expected: '\'',
            found: Some('b'),
            span: Span::new(2, 3),
        };
        assert_eq!(err.to_string(), "expected ''', found 'b'");

        let err = LexError::UnterminatedLiteral {
            kind: LiteralKind::String,
            span: Span::new(0, 1),
        };
        assert_eq!(err.to_string(), "unterminated string literal");
    }

    #[test]
    fn test_span_converts_to_source_span() {
        let span: SourceSpan = Span::new(4, 9).into();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 5);
    }
}
