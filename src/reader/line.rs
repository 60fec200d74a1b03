//! A single numbered line of statement text.
//!
//! `num` always refers to the position in the *original* raw input, so a
//! `Line` can be reported against the source text even after blank lines
//! were dropped during the split.

use crate::lexer::Token;

/// One numbered segment of the original statement text.
///
/// Invariants:
/// - `num >= 1`
/// - `tokens` is empty until exactly one tokeniser pass populates it; a
///   tokenised `Line` is not modified again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub content: String,
    pub num: usize,
    pub tokens: Vec<Token>,
}

impl Line {
    /// Construct an untokenised line.
    pub fn new(content: impl Into<String>, num: usize) -> Self {
        Self {
            content: content.into(),
            num,
            tokens: Vec::new(),
        }
    }

    /// The whitespace-split words of this line, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.content.split_whitespace()
    }
}
