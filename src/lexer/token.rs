//! Token model pairing a [`TokenKind`] tag with its literal value.
//!
//! Tokens keep the scanned word verbatim (terminators included) except where
//! a tokeniser case-folds a keyword position. Manipulating tokens means
//! constructing new ones, not mutating existing ones.

use crate::lexer::token_kind::TokenKind;

/// A `(kind, value)` pair produced from one whitespace-delimited word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("({kind}, {value})")]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// A `keyword` token. Callers are expected to pass the case-folded word.
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }

    /// A `table_reference` token, value kept verbatim.
    pub fn table_reference(value: impl Into<String>) -> Self {
        Self::new(TokenKind::TableReference, value)
    }

    /// A `???` token for fragments the scan does not claim.
    pub fn unclassified(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Unclassified, value)
    }

    /// True if this token is a keyword with the given value.
    pub fn is_keyword(&self, value: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == value
    }
}
