//! Conversion of JSON documents into values.
//!
//! JSON numbers become strings holding their default text form, and `null`
//! becomes the empty string. Callers depend on both, so neither is mapped to
//! a rat or a dedicated variant.

use serde_json::Value as Json;

use crate::errors::{unexpected_json_type, EvalError};
use crate::value::Value;

/// Convert a JSON tree into a value.
pub fn from_json(node: &Json) -> Result<Value, EvalError> {
    Ok(match node {
        Json::Null => Value::string(""),
        Json::Bool(b) => Value::bool(*b),
        Json::Number(n) => Value::string(number_text(n)),
        Json::String(s) => Value::string(s.as_str()),
        Json::Array(items) => Value::list(
            items
                .iter()
                .map(from_json)
                .collect::<Result<Vec<_>, EvalError>>()?,
        ),
        Json::Object(fields) => {
            let entries = fields
                .iter()
                .map(|(k, v)| Ok((Value::string(k.as_str()), from_json(v)?)))
                .collect::<Result<Vec<_>, EvalError>>()?;
            Value::map_from(entries)
        }
    })
}

/// Parse JSON text and convert it.
///
/// Text that is not a JSON document is reported as an unexpected JSON type.
pub fn from_json_text(text: &str) -> Result<Value, EvalError> {
    let node: Json = serde_json::from_str(text)
        .map_err(|err| unexpected_json_type(&format!("invalid json ({err})")))?;
    from_json(&node)
}

/// Default text form of a number.
///
/// Integers print as-is. Floats print in their shortest round-trip form,
/// switching to exponent notation below `1e-4` and from `1e21` on.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => float_text(f),
        None => n.to_string(),
    }
}

fn float_text(f: f64) -> String {
    let sci = format!("{f:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return f.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) if !(-4..21).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        _ => f.to_string(),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
