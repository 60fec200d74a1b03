use crate::lexer::{Token, Tokenise, extract_table_reference};
use crate::reader::Line;
use crate::trace;

/// Positional scanner for SELECT statements.
///
/// The scan is a fixed walk over the whitespace-split words of one line, no
/// backtracking, no lookahead: keyword, projection, keyword (`from`), table
/// target, keyword (`where` and friends), then `???` for the rest. Keyword
/// positions are case-folded; operand positions keep the word verbatim, a
/// trailing `;` included.
///
/// Compatibility note: the projection (word 1) is tagged `table_reference`
/// even though it names a column or expression. Downstream consumers depend
/// on that label.
pub struct Select;

impl Tokenise for Select {
    fn tokenise(&self, mut line: Line) -> Line {
        let mut tokens = Vec::new();

        for (position, word) in line.words().enumerate() {
            let token = match position {
                0 | 2 | 4 => Token::keyword(word.to_lowercase()),
                1 => Token::table_reference(word),
                3 => {
                    // Resolution is diagnostics only; a target the resolver
                    // rejects still tokenises.
                    match extract_table_reference(word.trim_end_matches(';')) {
                        Ok(reference) => trace!("Resolved table target {reference}"),
                        Err(err) => trace!("Unresolvable table target: {err}"),
                    }
                    Token::table_reference(word)
                }
                _ => Token::unclassified(word),
            };
            tokens.push(token);
        }

        line.tokens = tokens;
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use rstest::rstest;

    fn pairs(line: &Line) -> Vec<(TokenKind, &str)> {
        line.tokens
            .iter()
            .map(|t| (t.kind, t.value.as_str()))
            .collect()
    }

    #[rstest]
    #[case(
        "SELECT * FROM person;",
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::TableReference, "*"),
            (TokenKind::Keyword, "from"),
            (TokenKind::TableReference, "person;"),
        ]
    )]
    #[case(
        "SELECT last_name FROM person;",
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::TableReference, "last_name"),
            (TokenKind::Keyword, "from"),
            (TokenKind::TableReference, "person;"),
        ]
    )]
    #[case(
        "SELECT * FROM person WHERE name = 'test';",
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::TableReference, "*"),
            (TokenKind::Keyword, "from"),
            (TokenKind::TableReference, "person"),
            (TokenKind::Keyword, "where"),
            (TokenKind::Unclassified, "name"),
            (TokenKind::Unclassified, "="),
            (TokenKind::Unclassified, "'test';"),
        ]
    )]
    fn it_tokenises_a_select_correctly(
        #[case] content: &str,
        #[case] expected: Vec<(TokenKind, &str)>,
    ) {
        let line = Select.tokenise(Line::new(content, 1));
        assert_eq!(pairs(&line), expected);
        assert_eq!(line.content, content);
        assert_eq!(line.num, 1);
    }

    #[test]
    fn qualified_table_target_still_tokenises_verbatim() {
        let line = Select.tokenise(Line::new("SELECT venue FROM symfony.gigs;", 1));
        assert_eq!(
            pairs(&line)[3],
            (TokenKind::TableReference, "symfony.gigs;")
        );
    }

    #[test]
    fn continuation_lines_are_scanned_independently() {
        // Line-by-line tokenisation restarts the positional scan; the second
        // line of a split SELECT begins at the keyword position again.
        let line = Select.tokenise(Line::new("FROM person;", 2));
        assert_eq!(
            pairs(&line),
            vec![
                (TokenKind::Keyword, "from"),
                (TokenKind::TableReference, "person;"),
            ]
        );
    }
}
