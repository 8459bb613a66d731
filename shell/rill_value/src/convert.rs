//! Conversions and comparisons shared by every variant.
//!
//! These are the only places where printing and truthiness fall back to the
//! protocol defaults.

use crate::errors::{only_str_or_rat, parse_failure, EvalError};
use crate::value::{Heap, Rat, Shared, Value};

/// The variant's own string form, else its repr.
pub fn to_string(v: &Value) -> String {
    v.as_string().unwrap_or_else(|| v.repr())
}

/// The variant's own truthiness, else true.
pub fn to_bool(v: &Value) -> bool {
    v.as_bool().unwrap_or(true)
}

/// Whether every value is truthy. Empty is true.
pub fn all_true(values: &[Value]) -> bool {
    values.iter().all(to_bool)
}

/// Structural equality.
///
/// Containers are equal when they have the same variant and their elements
/// (or entries) are pairwise equal; sharing storage is not required.
/// Closures are equal only to themselves, builtins and externals by name.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Error(x), Value::Error(y)) => x == y,
        (Value::Rat(x), Value::Rat(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            if Shared::ptr_eq(x, y) {
                return true;
            }
            let (x, y) = (x.read(), y.read());
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| deep_equal(p, q))
        }
        (Value::Map(x), Value::Map(y)) => {
            if Shared::ptr_eq(x, y) {
                return true;
            }
            let (x, y) = (x.read(), y.read());
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        (Value::Closure(x), Value::Closure(y)) => Heap::ptr_eq(x, y),
        (Value::BuiltinFn(x), Value::BuiltinFn(y)) => x.name == y.name,
        (Value::ExternalCmd(x), Value::ExternalCmd(y)) => x.name == y.name,
        (Value::GlobPattern(x), Value::GlobPattern(y)) => x == y,
        _ => false,
    }
}

/// Convert a string or rat to a rat.
pub fn to_rat(v: &Value) -> Result<Rat, EvalError> {
    match v {
        Value::Rat(r) => Ok(Rat::clone(r)),
        Value::String(s) => Rat::parse(s).ok_or_else(|| parse_failure(&v.repr())),
        _ => Err(only_str_or_rat()),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
