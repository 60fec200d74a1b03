//! Token kind tags.
//!
//! Only three classifications exist: statement keywords, table-reference-ish
//! operands, and `???` for everything the positional scan does not claim.
//! `???` is a first-class "don't know yet" value, not an error; it lets
//! tokenisation finish even over clause syntax no tokeniser understands.

/// Classification tag attached to every [`crate::lexer::Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Recognised statement keyword (`select`, `from`, `where`, ...).
    Keyword,
    /// Table / database / column operand, stored verbatim.
    TableReference,
    /// Explicitly unclassified fragment.
    Unclassified,
}

impl TokenKind {
    /// Canonical wire form of the tag.
    pub const fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Keyword => "keyword",
            TableReference => "table_reference",
            Unclassified => "???",
        }
    }

    /// True if this tag marks a fragment the scan could not classify.
    pub const fn is_unclassified(self) -> bool {
        matches!(self, TokenKind::Unclassified)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
