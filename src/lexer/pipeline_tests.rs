//! End-to-end tests for the categorise → dispatch → scan pipeline.

use crate::*;
use rstest::rstest;

fn pairs(line: &Line) -> Vec<(TokenKind, &str)> {
    line.tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str()))
        .collect()
}

#[test]
fn it_tokenises_correctly_when_called_through_tokenise() {
    common_init();
    let query = tokenise(Query::from("SELECT last_name FROM person;")).unwrap();
    assert_eq!(query.lines.len(), 1);
    assert_eq!(
        pairs(&query.lines[0]),
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::TableReference, "last_name"),
            (TokenKind::Keyword, "from"),
            (TokenKind::TableReference, "person;"),
        ]
    );
}

#[test]
fn dispatcher_matches_direct_select_invocation() {
    common_init();
    let input = "SELECT * FROM person WHERE name = 'test';";

    let dispatched = tokenise(Query::from(input)).unwrap();
    let direct = Query::new(
        Query::from(input)
            .lines
            .into_iter()
            .map(|line| Select.tokenise(line))
            .collect(),
    );

    assert_eq!(dispatched, direct);
}

#[rstest]
#[case("DELETE FROM person WHERE age > 5;")]
#[case("UPDATE person SET name = 'Joe.Reynolds';")]
#[case("CREATE TABLE person")]
fn unsupported_categories_fall_back_to_the_use_scanner(#[case] input: &str) {
    common_init();
    let dispatched = tokenise(Query::from(input)).unwrap();
    let fallback = Query::new(
        Query::from(input)
            .lines
            .into_iter()
            .map(|line| Use.tokenise(line))
            .collect(),
    );

    assert_eq!(dispatched, fallback);
}

#[rstest]
#[case("DELETE FROM person;", Category::Delete)]
#[case("UPDATE person SET x = 1;", Category::Update)]
#[case("CREATE TABLE person", Category::Create)]
#[case("DECLARE p_total DECIMAL(10,2)", Category::Declare)]
#[case("LEAVE _label", Category::Leave)]
fn strict_dispatch_refuses_unsupported_categories(
    #[case] input: &str,
    #[case] expected: Category,
) {
    common_init();
    let err = tokenise_strict(Query::from(input)).unwrap_err();
    match err {
        Error::UnsupportedCategory(category) => assert_eq!(category, expected),
        other => panic!("Unexpected kind of err {other:?}"),
    }
}

#[rstest]
#[case("SELECT * FROM person;")]
#[case("USE symfony ;")]
fn strict_dispatch_matches_lenient_for_dedicated_tokenisers(#[case] input: &str) {
    common_init();
    let lenient = tokenise(Query::from(input)).unwrap();
    let strict = tokenise_strict(Query::from(input)).unwrap();
    assert_eq!(lenient, strict);
}

#[test]
fn categorisation_failures_propagate_through_the_dispatcher() {
    common_init();
    let err = tokenise(Query::from("Not a query SELECT * FROM l")).unwrap_err();
    match err {
        Error::UnrecognizedStatement(text) => {
            assert_eq!(text, "not a query select * from l");
        }
        other => panic!("Unexpected kind of err {other:?}"),
    }
}

#[test]
fn multi_line_select_is_scanned_line_by_line() {
    common_init();
    let query = tokenise(Query::from("SELECT *\n\nFROM person;")).unwrap();
    assert_eq!(query.lines.len(), 2);

    assert_eq!(query.lines[0].num, 1);
    assert_eq!(
        pairs(&query.lines[0]),
        vec![
            (TokenKind::Keyword, "select"),
            (TokenKind::TableReference, "*"),
        ]
    );

    assert_eq!(query.lines[1].num, 3);
    assert_eq!(
        pairs(&query.lines[1]),
        vec![
            (TokenKind::Keyword, "from"),
            (TokenKind::TableReference, "person;"),
        ]
    );
}

#[test]
fn tokenised_query_keeps_line_content_and_numbering() {
    common_init();
    let query = tokenise(Query::from("USE symfony ;")).unwrap();
    assert_eq!(query.lines[0].content, "USE symfony ;");
    assert_eq!(query.lines[0].num, 1);
    assert_eq!(query.get_content(), "USE symfony ;");
}
