//! Token types for the Skive lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the word operators `and`/`or`/`not`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! Literal tokens keep their exact source text. Numbers are interpreted only when they are emitted.

use std::fmt;

use crate::ast::Span;
use skive_core::lang::keywords::{self, KeywordId};
use skive_core::lang::operators::{self, OperatorId};
use skive_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals (source text) ==========
    Ident(String),
    /// Decimal digit run, e.g. `42`.
    Int(String),
    /// Digits, a dot and at least one more digit, e.g. `3.14`.
    Float(String),
    /// `0x` prefix plus hex digits, e.g. `0x1F`.
    Hex(String),
    /// Quoted character literal including its quotes, e.g. `'\n'`.
    Char(String),
    /// Quoted string literal including its quotes and escapes, e.g. `"a\"b"`.
    String(String),

    Eof,
}

impl TokenKind {
    /// Render the token for diagnostics: `'spelling'`, or `end of input` for [`TokenKind::Eof`].
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{other}'"),
        }
    }
}

impl fmt::Display for TokenKind {
    /// Writes the token's source spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident(text)
            | TokenKind::Int(text)
            | TokenKind::Float(text)
            | TokenKind::Hex(text)
            | TokenKind::Char(text)
            | TokenKind::String(text) => f.write_str(text),
            TokenKind::Eof => Ok(()),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

/// Source spellings of a token stream, without the trailing `Eof`.
pub fn spellings(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.kind.to_string())
        .collect()
}
