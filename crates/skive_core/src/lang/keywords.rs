//! Define the reserved keyword vocabulary for the Skive language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `and`, `or` and `not` are reserved words that double as word operators. If you need their precedence, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use skive_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Then,
    Else,
    End,
    While,
    Do,
    Return,

    // Definitions / declarations
    Fn,
    Struct,
    Let,

    // Word operators
    And,
    Or,
    Not,
}

/// Broad grouping used by tooling and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Operator,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::End, "end", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Fn, "fn", KeywordCategory::Definition),
    info(KeywordId::Struct, "struct", KeywordCategory::Definition),
    info(KeywordId::Let, "let", KeywordCategory::Definition),
    info(KeywordId::And, "and", KeywordCategory::Operator),
    info(KeywordId::Or, "or", KeywordCategory::Operator),
    info(KeywordId::Not, "not", KeywordCategory::Operator),
];

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Resolve a spelling to a keyword id, if it is reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
