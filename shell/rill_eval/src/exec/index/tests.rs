use super::*;
use pretty_assertions::assert_eq;

use rill_value::{EvalErrorKind, Rat};

const LEFT: Span = Span::new(0, 2);
const RIGHT: Span = Span::new(3, 4);

fn s(text: &str) -> Value {
    Value::string(text)
}

#[test]
fn test_index_list_and_string() {
    let list = Value::list(vec![s("a"), s("b"), s("c")]);
    assert_eq!(eval_index(&list, &s("1"), LEFT, RIGHT).unwrap(), s("b"));
    assert_eq!(eval_index(&list, &s("-1"), LEFT, RIGHT).unwrap(), s("c"));
    assert_eq!(
        eval_index(&s("héllo"), &s("1"), LEFT, RIGHT).unwrap(),
        s("é")
    );
}

#[test]
fn test_rat_index_accepted() {
    let list = Value::list(vec![s("a"), s("b")]);
    let idx = Value::rat(Rat::from_integer(1));
    assert_eq!(eval_index(&list, &idx, LEFT, RIGHT).unwrap(), s("b"));
}

#[test]
fn test_non_container_tagged_left() {
    let err = eval_index(&Value::bool(true), &s("0"), LEFT, RIGHT).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::CannotBeIndexed { kind: "bool" });
    assert_eq!(err.span, Some(LEFT));
}

#[test]
fn test_non_string_index_tagged_right() {
    let map = Value::map();
    let err = eval_index(&map, &Value::list(vec![]), LEFT, RIGHT).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::InvalidIndex { kind: "list" });
    assert_eq!(err.message, "list value cannot be used as index");
    assert_eq!(err.span, Some(RIGHT));
}

#[test]
fn test_index_errors_tagged_right() {
    let list = Value::list(vec![s("a")]);
    let err = eval_index(&list, &s("5"), LEFT, RIGHT).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfRange);
    assert_eq!(err.span, Some(RIGHT));

    let err = eval_index(&list, &s("x"), LEFT, RIGHT).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::NeedIntIndex);
    assert_eq!(err.span, Some(RIGHT));

    let map = Value::map_from([(s("k"), s("v"))]);
    assert_eq!(eval_index(&map, &s("k"), LEFT, RIGHT).unwrap(), s("v"));
    let err = eval_index(&map, &s("nope"), LEFT, RIGHT).unwrap_err();
    assert_eq!(err.message, "no such key: nope");
    assert_eq!(err.span, Some(RIGHT));
}
