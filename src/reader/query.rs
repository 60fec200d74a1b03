use itertools::Itertools as _;

use crate::reader::{Line, split_into_lines};

/// The ordered lines of one statement, owned exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub lines: Vec<Line>,
}

impl Query {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Reconstruct the statement by joining line contents with a single
    /// space, in line order.
    ///
    /// NOTE: Lossy by design. Newlines and original inter-line whitespace are
    /// not restored; the result only feeds prefix categorisation, never a
    /// reproduction of the source text.
    pub fn get_content(&self) -> String {
        self.lines.iter().map(|line| line.content.as_str()).join(" ")
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(split_into_lines(raw))
    }
}
