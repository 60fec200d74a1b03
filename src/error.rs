use crate::lexer::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to categorise query: {0}")]
    UnrecognizedStatement(String),

    #[error("Malformed table reference `{reference}`: expected 1 to 3 dotted segments, found {segments}")]
    MalformedReference { reference: String, segments: usize },

    #[error("No tokeniser implemented for `{0}` statements")]
    UnsupportedCategory(Category),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
