//! Id-based queries on [`TokenKind`], so the parser never compares spellings.

use crate::lexer::TokenKind;
use skive_core::lang::keywords::KeywordId;
use skive_core::lang::operators::OperatorId;
use skive_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        if let TokenKind::Keyword(id) = self { Some(*id) } else { None }
    }

    /// Operator id of a symbolic operator token. Word operators are keywords; see
    /// [`TokenKind::binary_operator_id`].
    pub fn operator_id(&self) -> Option<OperatorId> {
        if let TokenKind::Operator(id) = self { Some(*id) } else { None }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        *self == TokenKind::Punctuation(id)
    }

    /// Operator meaning of this token in binary position, folding `and` / `or` in.
    pub fn binary_operator_id(&self) -> Option<OperatorId> {
        match self.keyword_id() {
            Some(KeywordId::And) => Some(OperatorId::And),
            Some(KeywordId::Or) => Some(OperatorId::Or),
            Some(_) => None,
            None => self.operator_id(),
        }
    }
}
