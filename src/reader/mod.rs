//! Line-oriented statement model.
//!
//! Raw statement text arrives as one (possibly multi-line) string and is
//! split into numbered [`Line`]s collected under a [`Query`]. The split is
//! deliberately dumb: no trimming of kept lines, no unescaping, no statement
//! boundary detection. Blank lines are dropped but their positions are not
//! recycled, so `num` values may have gaps — downstream diagnostics point at
//! the original input, not at a renumbered copy.
//!
//! Modules:
//! - `line`  : A single numbered line plus the tokens scanned out of it.
//! - `query` : The ordered line collection and its lossy reconstruction.

pub mod line;
pub mod query;

pub use line::Line;
pub use query::Query;

/// Split raw statement text on newline boundaries.
///
/// Whitespace-only lines are dropped; every kept [`Line`] carries its
/// untrimmed original text and its 1-based position in the *unsplit* input.
pub fn split_into_lines(raw: &str) -> Vec<Line> {
    raw.lines()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(index, content)| Line::new(content, index + 1))
        .collect()
}
