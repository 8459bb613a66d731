//! `json` and `index`: import a JSON document and index into it.

use rill_eval::{eval_index, run_top_level, Span, Value};
use rill_value::from_json_text;

use super::read_input;

/// Print the repr of the value a JSON document imports as.
pub fn json_command(path: &str, out: &mut Vec<String>) -> Result<(), String> {
    let value = from_json_text(&read_input(path)?).map_err(|e| e.to_string())?;
    out.push(value.repr());
    Ok(())
}

/// Import a JSON document and index into it, one index per argument.
///
/// Errors point into the indexing expression as it would be written,
/// `$json[a][b]`, so a bad index is reported at its own position.
pub fn index_command(path: &str, indices: &[String], out: &mut Vec<String>) -> Result<(), String> {
    let root = from_json_text(&read_input(path)?).map_err(|e| e.to_string())?;

    let mut expr = String::from("$json");
    let mut current = root;
    let mut failure = None;
    for idx in indices {
        let left_span = Span::new(0, offset(&expr)?);
        let start = offset(&expr)? + 1;
        let right_span = Span::new(start, start + offset(idx)?);
        expr.push('[');
        expr.push_str(idx);
        expr.push(']');

        match eval_index(&current, &Value::string(idx.as_str()), left_span, right_span) {
            Ok(value) => current = value,
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    let report = run_top_level(failure.map_or(Ok(()), Err));
    match report.diagnostic {
        None => {
            out.push(current.repr());
            Ok(())
        }
        Some(diagnostic) => Err(format!("{expr}: {diagnostic}")),
    }
}

fn offset(text: &str) -> Result<u32, String> {
    u32::try_from(text.len()).map_err(|_| "index expression too long".to_string())
}
