//! Indexing as written in source: `$left[right]`.

use rill_value::{cannot_be_indexed, index, invalid_index, EvalError, Span, Value};

/// Index `left` by `right`, tagging errors with the offending operand's span.
///
/// A receiver that is not a container is reported at `left_span`. The index
/// must be a string (rats count); anything else, and every error `index`
/// itself raises, is reported at `right_span`.
pub fn eval_index(
    left: &Value,
    right: &Value,
    left_span: Span,
    right_span: Span,
) -> Result<Value, EvalError> {
    if !matches!(left, Value::String(_) | Value::List(_) | Value::Map(_)) {
        return Err(cannot_be_indexed(left.kind()).with_span(left_span));
    }
    if !matches!(right, Value::String(_) | Value::Rat(_)) {
        return Err(invalid_index(right.kind()).with_span(right_span));
    }
    index(left, right).map_err(|err| match err.span {
        Some(_) => err,
        None => err.with_span(right_span),
    })
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
