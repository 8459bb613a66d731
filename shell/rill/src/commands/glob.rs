//! `glob`: describe the pattern a wildcard word builds.

use rill_glob::{parse_wildcards, Segment};
use rill_value::{EvalError, Value};

/// Print the pattern value, then one line per segment.
pub fn glob_command(word: &str, out: &mut Vec<String>) -> Result<(), String> {
    let pattern = parse_wildcards(word).map_err(|e| EvalError::from(e).to_string())?;
    let lines: Vec<String> = pattern.segments().iter().map(describe).collect();
    out.push(Value::glob_pattern(pattern).repr());
    out.extend(lines);
    Ok(())
}

fn describe(segment: &Segment) -> String {
    match segment {
        Segment::Literal(text) => format!("  literal {text}"),
        Segment::Slash => "  slash".to_string(),
        Segment::Star => "  star".to_string(),
        Segment::StarStar => "  star-star".to_string(),
        Segment::Question => "  question".to_string(),
    }
}
