//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators like `and`)
//! along with the metadata the parser needs: binding strength and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`and`, `or`, `not`) are lexed as keywords; their entries have
//!   [`OperatorInfo::is_keyword_spelling`] set to `true`.
//! - `precedence` is only meaningful for [`Fixity::Infix`] entries. Higher binds tighter.
//!
//! ## Examples
//! ```rust
//! use skive_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::info_for(OperatorId::Star).precedence, 12);
//! assert_eq!(operators::info_for(OperatorId::PlusEq).fixity, Fixity::Assignment);
//! ```

/// Define how an operator is used syntactically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Binary operator between two operands.
    Infix,
    /// Prefix-only unary operator.
    Prefix,
    /// Statement-level assignment operator (`=`, `+=`, ...).
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,

    // Logical (word operators)
    And,
    Or,
    Not,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators, in [`OperatorId`] declaration order.
///
/// `-` is listed as infix; its prefix use is handled by the unary parser directly.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", 11, Fixity::Infix, false),
    op(OperatorId::Minus, "-", 11, Fixity::Infix, false),
    op(OperatorId::Star, "*", 12, Fixity::Infix, false),
    op(OperatorId::Slash, "/", 12, Fixity::Infix, false),
    op(OperatorId::Percent, "%", 12, Fixity::Infix, false),
    op(OperatorId::Lt, "<", 9, Fixity::Infix, false),
    op(OperatorId::LtEq, "<=", 9, Fixity::Infix, false),
    op(OperatorId::Gt, ">", 9, Fixity::Infix, false),
    op(OperatorId::GtEq, ">=", 9, Fixity::Infix, false),
    op(OperatorId::EqEq, "==", 8, Fixity::Infix, false),
    op(OperatorId::NotEq, "!=", 8, Fixity::Infix, false),
    op(OperatorId::And, "and", 4, Fixity::Infix, true),
    op(OperatorId::Or, "or", 3, Fixity::Infix, true),
    op(OperatorId::Not, "not", 0, Fixity::Prefix, true),
    op(OperatorId::Eq, "=", 0, Fixity::Assignment, false),
    op(OperatorId::PlusEq, "+=", 0, Fixity::Assignment, false),
    op(OperatorId::MinusEq, "-=", 0, Fixity::Assignment, false),
    op(OperatorId::StarEq, "*=", 0, Fixity::Assignment, false),
];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        fixity,
        is_keyword_spelling,
    }
}
