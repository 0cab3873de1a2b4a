//! Parser tests for well-formed templates

use super::helpers::lit;
use crate::template::{parse, OneofEntry, Token};

fn entry(weight: f64, token: Token) -> OneofEntry {
    OneofEntry { weight, token }
}

#[test]
fn test_parse_literal() {
    assert_eq!(parse("\"hi\"").unwrap(), lit("hi"));
}

#[test]
fn test_parse_empty_literal() {
    assert_eq!(parse("\"\"").unwrap(), lit(""));
}

#[test]
fn test_parse_title() {
    assert_eq!(
        parse("-\"hi\"+").unwrap(),
        Token::TitleCase(Box::new(lit("hi")))
    );
}

#[test]
fn test_parse_oneof() {
    assert_eq!(
        parse("[0.25 \"hi\", 0.1 \"ho\", 0.75 \"bye\"]").unwrap(),
        Token::OneofList(vec![
            entry(0.25, lit("hi")),
            entry(0.1, lit("ho")),
            entry(0.75, lit("bye")),
        ])
    );
}

#[test]
fn test_spaces_in_oneof() {
    assert_eq!(
        parse("[0.3 \" \", 0.7 \"-\"]").unwrap(),
        Token::OneofList(vec![entry(0.3, lit(" ")), entry(0.7, lit("-"))])
    );
}

#[test]
fn test_parse_nested_oneof() {
    assert_eq!(
        parse("[0.2 [0.3 \" \", 0.7 \"-\"]]").unwrap(),
        Token::OneofList(vec![entry(
            0.2,
            Token::OneofList(vec![entry(0.3, lit(" ")), entry(0.7, lit("-"))])
        )])
    );
}

#[test]
fn test_oneof_skips_empty_entries() {
    assert_eq!(
        parse("[, 1 \"a\",, 2 \"b\",]").unwrap(),
        Token::OneofList(vec![entry(1.0, lit("a")), entry(2.0, lit("b"))])
    );
}

#[test]
fn test_parse_optional() {
    assert_eq!(
        parse("{0.25 \"hi\"}").unwrap(),
        Token::Optional {
            odds: 0.25,
            inner: Box::new(lit("hi")),
        }
    );
}

#[test]
fn test_optional_odds_bounds_accepted() {
    assert!(parse("{0 \"a\"}").is_ok());
    assert!(parse("{1 \"a\"}").is_ok());
    assert!(parse("{1.0 \"a\"}").is_ok());
}

#[test]
fn test_parse_list_selectors() {
    assert_eq!(
        parse("$names").unwrap(),
        Token::ListSelection {
            name: "names".to_string(),
            filtered: true,
        }
    );
    assert_eq!(
        parse("#foo").unwrap(),
        Token::ListSelection {
            name: "foo".to_string(),
            filtered: false,
        }
    );
}

#[test]
fn test_identifier_allows_underscore_and_unicode_letters() {
    assert_eq!(
        parse("$first_Námé").unwrap(),
        Token::ListSelection {
            name: "first_Námé".to_string(),
            filtered: true,
        }
    );
}

#[test]
fn test_parse_ordinal() {
    assert_eq!(parse("%192").unwrap(), Token::OrdinalSelection { max: 192 });
}

#[test]
fn test_parse_substitution() {
    assert_eq!(
        parse("@FOO").unwrap(),
        Token::Substitution {
            key: "FOO".to_string()
        }
    );
}

#[test]
fn test_parse_sequence() {
    assert_eq!(
        parse("$a \" \" #b %3 @K").unwrap(),
        Token::Sequence(vec![
            Token::ListSelection {
                name: "a".to_string(),
                filtered: true,
            },
            lit(" "),
            Token::ListSelection {
                name: "b".to_string(),
                filtered: false,
            },
            Token::OrdinalSelection { max: 3 },
            Token::Substitution {
                key: "K".to_string()
            },
        ])
    );
}

#[test]
fn test_names_end_at_control_characters() {
    assert_eq!(
        parse("$a$b").unwrap(),
        Token::Sequence(vec![
            Token::ListSelection {
                name: "a".to_string(),
                filtered: true,
            },
            Token::ListSelection {
                name: "b".to_string(),
                filtered: true,
            },
        ])
    );
}

#[test]
fn test_sequence_inside_constructs() {
    assert_eq!(
        parse("{0.5 \"a\" \"b\"}").unwrap(),
        Token::Optional {
            odds: 0.5,
            inner: Box::new(Token::Sequence(vec![lit("a"), lit("b")])),
        }
    );
    assert_eq!(
        parse("-\"a\" $w+").unwrap(),
        Token::TitleCase(Box::new(Token::Sequence(vec![
            lit("a"),
            Token::ListSelection {
                name: "w".to_string(),
                filtered: true,
            },
        ])))
    );
}

#[test]
fn test_nested_title_case() {
    assert_eq!(
        parse("-\"a\" -\"b\"+ \"c\"+").unwrap(),
        Token::TitleCase(Box::new(Token::Sequence(vec![
            lit("a"),
            Token::TitleCase(Box::new(lit("b"))),
            lit("c"),
        ])))
    );
}

#[test]
fn test_parse_full_example() {
    assert_eq!(
        parse("{ 0.35 [0.75 $names, 0.25 \"Bumbler\", 0.1 %25, 0.4 @KEY] }").unwrap(),
        Token::Optional {
            odds: 0.35,
            inner: Box::new(Token::OneofList(vec![
                entry(
                    0.75,
                    Token::ListSelection {
                        name: "names".to_string(),
                        filtered: true,
                    }
                ),
                entry(0.25, lit("Bumbler")),
                entry(0.1, Token::OrdinalSelection { max: 25 }),
                entry(
                    0.4,
                    Token::Substitution {
                        key: "KEY".to_string()
                    }
                ),
            ])),
        }
    );
}

#[test]
fn test_whitespace_and_line_breaks_insignificant() {
    let compact = parse("[1 $a,2 \"b\"]").unwrap();
    let spread = parse("[ 1\t$a ,\r\n  2 \"b\" ]\r\n").unwrap();
    assert_eq!(compact, spread);
}

#[test]
fn test_nesting_at_limit_parses() {
    let depth = crate::template::MAX_NESTING_DEPTH;
    let template = format!("{}\"x\"{}", "{1 ".repeat(depth), "}".repeat(depth));
    assert!(parse(&template).is_ok());
}

#[test]
fn test_referenced_names() {
    let token = parse("[1 $a, 1 #a] -$b+ @K {0.5 @L}").unwrap();
    let lists: Vec<(String, bool)> = token.referenced_lists().into_iter().collect();
    assert_eq!(
        lists,
        vec![
            ("a".to_string(), false),
            ("a".to_string(), true),
            ("b".to_string(), true),
        ]
    );
    let keys: Vec<String> = token.referenced_keys().into_iter().collect();
    assert_eq!(keys, vec!["K".to_string(), "L".to_string()]);
}
