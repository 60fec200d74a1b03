use crate::lexer::{Token, Tokenise};
use crate::reader::Line;

/// Positional scanner for USE statements.
///
/// Word 0 is the case-folded keyword; every further word is a
/// `table_reference` kept verbatim, so multiple targets tokenise
/// consecutively and a lone `;` becomes a `table_reference` of its own.
///
/// This scanner also serves as the historical fallback for categories with
/// no dedicated tokeniser (see the dispatcher).
pub struct Use;

impl Tokenise for Use {
    fn tokenise(&self, mut line: Line) -> Line {
        let mut tokens = Vec::new();

        for (position, word) in line.words().enumerate() {
            let token = match position {
                0 => Token::keyword(word.to_lowercase()),
                _ => Token::table_reference(word),
            };
            tokens.push(token);
        }

        line.tokens = tokens;
        line
    }
}
