use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_empty_string() {
    assert_eq!(quote(""), "''");
}

#[test]
fn test_barewords_are_unchanged() {
    for word in ["x", "foo-bar", "a/b.c", "user@host:8080", "50%", "a,b+c!", "héllo", "a~b"] {
        assert_eq!(quote(word), word);
    }
}

#[test]
fn test_leading_tilde_is_quoted() {
    assert_eq!(quote("~"), "'~'");
    assert_eq!(quote("~user"), "'~user'");
}

#[test]
fn test_single_quoting() {
    assert_eq!(quote("a b"), "'a b'");
    assert_eq!(quote("it's"), "'it''s'");
    assert_eq!(quote("$x"), "'$x'");
    assert_eq!(quote("[]"), "'[]'");
}

#[test]
fn test_control_characters_are_double_quoted() {
    assert_eq!(quote("a\nb"), "\"a\\nb\"");
    assert_eq!(quote("\t\"q\""), "\"\\t\\\"q\\\"\"");
    assert_eq!(quote("x\u{1}"), "\"x\\x01\"");
    assert_eq!(quote("\u{1b}[0m"), "\"\\e[0m\"");
    assert_eq!(quote("a\\b\n"), "\"a\\\\b\\n\"");
}
