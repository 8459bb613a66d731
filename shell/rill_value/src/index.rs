//! Indexing: `$s[i]`, `$l[i]`, `$m[k]` and indexed assignment.

use std::num::IntErrorKind;

use crate::errors::{
    cannot_be_indexed, index_out_of_range, invalid_index, need_int_index, no_such_key, EvalError,
};
use crate::value::{MapStorage, Shared, Value};

/// Read `container[idx]`.
///
/// Strings index by code point, lists by position (negative counts from the
/// end), maps by key.
pub fn index(container: &Value, idx: &Value) -> Result<Value, EvalError> {
    match container {
        Value::String(s) => {
            let len = s.chars().count();
            let i = normalize_index(int_index(idx)?, len)?;
            let c = s.chars().nth(i).ok_or_else(index_out_of_range)?;
            Ok(Value::string(c))
        }
        Value::List(items) => {
            let items = items.read();
            let i = normalize_index(int_index(idx)?, items.len())?;
            Ok(items[i].clone())
        }
        Value::Map(entries) => entries
            .read()
            .get(idx)
            .cloned()
            .ok_or_else(|| no_such_key(&idx.repr())),
        _ => Err(cannot_be_indexed(container.kind())),
    }
}

/// Write `container[idx] = value`.
///
/// Lists are overwritten in place and never grow; maps insert or overwrite.
/// Strings are immutable.
pub fn index_set(container: &Value, idx: Value, value: Value) -> Result<(), EvalError> {
    match container {
        Value::List(items) => {
            let i = int_index(&idx)?;
            let mut items = items.write();
            let i = normalize_index(i, items.len())?;
            items[i] = value;
            Ok(())
        }
        Value::Map(entries) => {
            if references(&idx, entries) {
                return Err(EvalError::new("map value cannot be a key of itself"));
            }
            entries.write().insert(idx, value);
            Ok(())
        }
        _ => Err(cannot_be_indexed(container.kind())),
    }
}

/// Integer value of an index.
///
/// Strings and rats are accepted; any other kind is `InvalidIndex`.
pub fn int_index(idx: &Value) -> Result<i64, EvalError> {
    match idx {
        Value::String(s) => parse_int_index(s),
        Value::Rat(r) => parse_int_index(&r.as_string()),
        _ => Err(invalid_index(idx.kind())),
    }
}

/// Parse decimal integer text with an optional sign.
pub fn parse_int_index(text: &str) -> Result<i64, EvalError> {
    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => index_out_of_range(),
        _ => need_int_index(),
    })
}

/// Resolve a possibly negative index against `len`.
pub fn normalize_index(i: i64, len: usize) -> Result<usize, EvalError> {
    let len = i64::try_from(len).map_err(|_| index_out_of_range())?;
    let i = if i < 0 { i.checked_add(len) } else { Some(i) };
    match i {
        Some(i) if (0..len).contains(&i) => usize::try_from(i).map_err(|_| index_out_of_range()),
        _ => Err(index_out_of_range()),
    }
}

/// Whether `value` is, or contains, the map `target`.
///
/// Hashing such a key would need the map's lock while it is held for
/// writing.
fn references(value: &Value, target: &MapStorage) -> bool {
    match value {
        Value::Map(entries) => {
            if Shared::ptr_eq(entries, target) {
                return true;
            }
            entries
                .read()
                .iter()
                .any(|(k, v)| references(k, target) || references(v, target))
        }
        Value::List(items) => items.read().iter().any(|item| references(item, target)),
        _ => false,
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
