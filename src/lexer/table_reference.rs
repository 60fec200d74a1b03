//! Dotted-identifier resolution.
//!
//! A table reference names a column, table, or database-qualified table with
//! one to three dot-delimited segments. The rightmost segment binds tightest:
//! two segments mean `database.table`, three mean `database.table.column`,
//! and `table` is always present.

use crate::{Error, Result};

/// A resolved dot-qualified identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    pub database: Option<String>,
    pub table: String,
    pub column: Option<String>,
}

impl std::fmt::Display for TableReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(database) = &self.database {
            write!(f, "{database}.")?;
        }
        f.write_str(&self.table)?;
        if let Some(column) = &self.column {
            write!(f, ".{column}")?;
        }
        Ok(())
    }
}

/// Split a dotted identifier into its database/table/column parts.
///
/// Empty input and more than three segments are
/// [`Error::MalformedReference`]; the extra segments are never truncated or
/// ignored.
pub fn extract_table_reference(reference: &str) -> Result<TableReference> {
    if reference.is_empty() {
        return Err(Error::MalformedReference {
            reference: reference.to_string(),
            segments: 0,
        });
    }

    let segments: Vec<&str> = reference.split('.').collect();
    match segments.as_slice() {
        [table] => Ok(TableReference {
            database: None,
            table: (*table).to_string(),
            column: None,
        }),
        [database, table] => Ok(TableReference {
            database: Some((*database).to_string()),
            table: (*table).to_string(),
            column: None,
        }),
        [database, table, column] => Ok(TableReference {
            database: Some((*database).to_string()),
            table: (*table).to_string(),
            column: Some((*column).to_string()),
        }),
        _ => Err(Error::MalformedReference {
            reference: reference.to_string(),
            segments: segments.len(),
        }),
    }
}
