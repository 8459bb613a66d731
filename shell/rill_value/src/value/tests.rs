use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Nop;

impl Op for Nop {
    fn exec(&self, _ctx: &mut dyn EvalContext) -> Result<(), EvalError> {
        Ok(())
    }
}

fn closure(params: &[&str], variadic: bool) -> Closure {
    Closure::new(
        params.iter().map(ToString::to_string).collect(),
        variadic,
        OpHandle::new(Nop),
        FxHashMap::default(),
    )
}

fn noop_builtin(_ctx: &mut dyn EvalContext, _args: &[Value]) -> Result<(), EvalError> {
    Ok(())
}

#[test]
fn test_kinds() {
    assert_eq!(Value::string("x").kind(), "string");
    assert_eq!(Value::bool(true).kind(), "bool");
    assert_eq!(Value::ok().kind(), "error");
    assert_eq!(Value::list(vec![]).kind(), "list");
    assert_eq!(Value::map().kind(), "map");
    assert_eq!(Value::closure(closure(&[], false)).kind(), "fn");
    assert_eq!(Value::builtin("echo", noop_builtin).kind(), "fn");
    assert_eq!(Value::external("ls").kind(), "fn");
    assert_eq!(Value::rat(Rat::from_integer(1)).kind(), "string");
    assert_eq!(
        Value::glob_pattern(rill_glob::Pattern::new()).kind(),
        "glob-pattern"
    );
}

#[test]
fn test_scalar_reprs() {
    assert_eq!(Value::string("a b").repr(), "'a b'");
    assert_eq!(Value::string("").repr(), "''");
    assert_eq!(Value::bool(true).repr(), "$true");
    assert_eq!(Value::bool(false).repr(), "$false");
    assert_eq!(Value::ok().repr(), "$ok");
    assert_eq!(Value::rat(Rat::from_integer(-2)).repr(), "(rat -2)");
}

#[test]
fn test_container_reprs() {
    let list = Value::list(vec![
        Value::string("a"),
        Value::list(vec![]),
        Value::bool(false),
    ]);
    assert_eq!(list.repr(), "[a [] $false]");
    assert_eq!(Value::map().repr(), "[&]");

    let map = Value::map_from([
        (Value::string("b"), Value::string("2")),
        (Value::string("a"), Value::list(vec![Value::string("1")])),
    ]);
    assert_eq!(map.repr(), "[&a [1] &b 2]");
}

#[test]
fn test_callable_reprs() {
    assert_eq!(Value::closure(closure(&[], false)).repr(), "<closure ()>");
    assert_eq!(
        Value::closure(closure(&["a", "b", "rest"], true)).repr(),
        "<closure (a b @rest)>"
    );
    assert_eq!(Value::builtin("echo", noop_builtin).repr(), "$fn-echo");
    assert_eq!(Value::external("ls").repr(), "<external ls >");
}

#[test]
fn test_glob_pattern_repr() {
    let pattern = rill_glob::parse_wildcards("a/*.rs").map(Value::glob_pattern);
    assert_eq!(
        pattern.map(|p| p.repr()),
        Ok("<glob-pattern a/*.rs>".to_string())
    );
}

#[test]
fn test_optional_forms() {
    assert_eq!(Value::string("x").as_string(), Some("x".to_string()));
    assert_eq!(Value::bool(false).as_string(), Some("false".to_string()));
    assert_eq!(
        Value::rat(Rat::from_integer(3)).as_string(),
        Some("3".to_string())
    );
    assert_eq!(Value::list(vec![]).as_string(), None);
    assert_eq!(Value::external("ls").as_string(), None);

    assert_eq!(Value::bool(false).as_bool(), Some(false));
    assert_eq!(Value::ok().as_bool(), Some(true));
    assert_eq!(Value::string("").as_bool(), None);
}

#[test]
fn test_display_is_to_string() {
    assert_eq!(Value::string("a b").to_string(), "a b");
    assert_eq!(Value::list(vec![Value::string("a b")]).to_string(), "['a b']");
    assert_eq!(format!("{:?}", Value::string("a b")), "'a b'");
}

#[test]
fn test_list_aliasing() {
    let a = Value::list(vec![Value::string("1")]);
    let b = a.clone();
    a.push(Value::string("2")).unwrap();
    assert_eq!(b.len(), Some(2));
    assert!(a.same_ref(&b));

    let c = Value::list(b.to_vec().unwrap_or_default());
    c.push(Value::string("3")).unwrap();
    assert_eq!(a.len(), Some(2));
    assert_eq!(c.len(), Some(3));
}

#[test]
fn test_append_strings() {
    let list = Value::list(vec![]);
    list.append_strings(["a", "b"]).unwrap();
    assert_eq!(list.repr(), "[a b]");
    assert_eq!(
        Value::string("x").append_strings(["a"]).map_err(|e| e.message),
        Err("string value is not a list".to_string())
    );
}

#[test]
fn test_len() {
    assert_eq!(Value::string("héllo").len(), Some(5));
    assert_eq!(Value::map().len(), Some(0));
    assert_eq!(Value::map().is_empty(), Some(true));
    assert_eq!(Value::bool(true).len(), None);
}

#[test]
fn test_variable_cells_alias() {
    let cell = Variable::new(Value::string("0"));
    let other = cell.clone();
    let old = other.set(Value::string("1"));
    assert_eq!(old, Value::string("0"));
    assert_eq!(cell.get(), Value::string("1"));
    assert!(Variable::ptr_eq(&cell, &other));
    assert!(!Variable::ptr_eq(&cell, &Variable::new(Value::string("1"))));
}

#[test]
fn test_closure_required_args() {
    assert_eq!(closure(&["a", "b"], false).required_args(), 2);
    assert_eq!(closure(&["a", "rest"], true).required_args(), 1);
    assert_eq!(closure(&[], true).required_args(), 0);
}

#[test]
fn test_closure_clone_shares_body() {
    let f = closure(&["a"], false);
    let g = f.clone();
    assert!(OpHandle::ptr_eq(&f.op, &g.op));
}

#[test]
fn test_builtin_invoke_and_debug() {
    fn collect(ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
        for arg in args {
            ctx.output(arg.clone());
        }
        Ok(())
    }

    #[derive(Default)]
    struct Sink(Vec<Value>);

    impl EvalContext for Sink {
        fn output(&mut self, value: Value) {
            self.0.push(value);
        }
        fn lookup(&self, _name: &str) -> Option<Variable> {
            None
        }
        fn define(&mut self, _name: &str, value: Value) -> Variable {
            Variable::new(value)
        }
        fn call(&mut self, callee: &Value, _args: Vec<Value>) -> Result<(), EvalError> {
            Err(crate::not_callable(callee.kind()))
        }
    }

    let builtin = BuiltinFn::new("put", collect);
    let mut sink = Sink::default();
    builtin
        .invoke(&mut sink, &[Value::string("a"), Value::string("b")])
        .unwrap();
    assert_eq!(sink.0, vec![Value::string("a"), Value::string("b")]);
    assert_eq!(
        format!("{builtin:?}"),
        "BuiltinFn { name: \"put\", .. }"
    );
}
