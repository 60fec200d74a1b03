//! Statement categorisation by prefix inspection.
//!
//! A whole statement gets one coarse [`Category`] label from an anchored,
//! case-insensitive prefix test against a fixed ordered table. The match is
//! intentionally shallow: `select garbage` still categorises as `select`,
//! because validating what follows the keyword is the tokeniser's problem
//! (and mostly not even its problem — see the `???` token kind).
//!
//! The prefix table is process-wide immutable data, never mutated at
//! runtime. Extend it together with the `Category` enum.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Select,
    Delete,
    Update,
    Create,
    Declare,
    Leave,
    Use,
}

/// Recognised statement prefixes, in match order. First hit wins.
pub const PREFIXES: [(&str, Category); 7] = [
    ("select", Category::Select),
    ("delete", Category::Delete),
    ("update", Category::Update),
    ("create", Category::Create),
    ("declare", Category::Declare),
    ("leave", Category::Leave),
    ("use", Category::Use),
];

impl Category {
    /// Canonical lowercase string form of the category.
    pub const fn as_str(self) -> &'static str {
        use Category::*;
        match self {
            Select => "select",
            Delete => "delete",
            Update => "update",
            Create => "create",
            Declare => "declare",
            Leave => "leave",
            Use => "use",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorise a whole statement by its leading keyword.
///
/// The input is trimmed and lowercased before the anchored prefix test.
/// Returns [`Error::UnrecognizedStatement`] carrying the normalised text
/// when no prefix matches.
pub fn categorise(query: &str) -> Result<Category> {
    let normalised = query.trim().to_lowercase();
    PREFIXES
        .iter()
        .find(|(prefix, _)| normalised.starts_with(prefix))
        .map(|&(_, category)| category)
        .ok_or(Error::UnrecognizedStatement(normalised))
}
