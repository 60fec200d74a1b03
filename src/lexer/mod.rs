//! Statement categorisation and tokenisation.
//!
//! The pipeline is small and strictly synchronous: a [`crate::reader::Query`]
//! is reconstructed into one string, categorised by prefix, and handed to the
//! tokeniser selected for its category, which scans each line independently.
//!
//! Modules:
//! - `category`        : `Category` enum, prefix table, `categorise`.
//! - `token_kind`      : The three-way `keyword` / `table_reference` / `???` tag.
//! - `token`           : `(kind, value)` token pairs.
//! - `table_reference` : Dotted-identifier resolution.
//! - `select`          : Positional scanner for SELECT statements.
//! - `use_stmt`        : Positional scanner for USE statements (and fallback).
//!
//! Design principles:
//! 1. Tokenisation never fails; only categorisation and reference resolution
//!    return errors, and they propagate untouched (no recovery, no partial
//!    results).
//! 2. Unsupported clause syntax becomes `???` tokens, not errors.
//! 3. Tokenisers are interchangeable behind the [`Tokenise`] trait and are
//!    picked through one explicit lookup, keeping the fallback auditable.

pub mod category;
pub mod select;
pub mod table_reference;
pub mod token;
pub mod token_kind;
pub mod use_stmt;

pub use category::{Category, PREFIXES, categorise};
pub use select::Select;
pub use table_reference::{TableReference, extract_table_reference};
pub use token::Token;
pub use token_kind::TokenKind;
pub use use_stmt::Use;

use crate::reader::{Line, Query};
use crate::{Error, Result, debug};

/// Capability interface for per-line tokenisers.
///
/// Implementations populate `line.tokens` from the whitespace-split words of
/// `line.content` in a single forward scan.
pub trait Tokenise {
    fn tokenise(&self, line: Line) -> Line;
}

/// Tokeniser lookup per category. `None` means no dedicated tokeniser
/// exists; the public entry points decide what that means.
fn tokeniser_for(category: Category) -> Option<&'static dyn Tokenise> {
    match category {
        Category::Select => Some(&Select),
        Category::Use => Some(&Use),
        Category::Delete
        | Category::Update
        | Category::Create
        | Category::Declare
        | Category::Leave => None,
    }
}

/// Categorise and tokenise a whole query.
///
/// Categories without a dedicated tokeniser reuse the USE scanner. That
/// fallback is long-standing observable behaviour; callers who want a hard
/// failure instead use [`tokenise_strict`].
pub fn tokenise(query: Query) -> Result<Query> {
    let category = categorise(&query.get_content())?;
    debug!("Categorised query as {category}");
    let tokeniser = tokeniser_for(category).unwrap_or(&Use);
    Ok(scan(tokeniser, query))
}

/// Like [`tokenise`], but a category without a dedicated tokeniser is
/// [`Error::UnsupportedCategory`] instead of falling back to the USE scanner.
pub fn tokenise_strict(query: Query) -> Result<Query> {
    let category = categorise(&query.get_content())?;
    debug!("Categorised query as {category}");
    let tokeniser = tokeniser_for(category).ok_or(Error::UnsupportedCategory(category))?;
    Ok(scan(tokeniser, query))
}

fn scan(tokeniser: &dyn Tokenise, mut query: Query) -> Query {
    query.lines = query
        .lines
        .into_iter()
        .map(|line| tokeniser.tokenise(line))
        .collect();
    query
}

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{
        Category, Token, TokenKind, Tokenise, categorise, extract_table_reference, tokenise,
        tokenise_strict,
    };
}

#[cfg(test)]
mod pipeline_tests;
