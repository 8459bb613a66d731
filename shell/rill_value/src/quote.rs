//! Shell quoting of string reprs.

use std::fmt::Write;

/// Quote `s` so the parser reads it back as the same string.
///
/// Barewords come back unchanged, other printable text is single-quoted and
/// anything with control characters is double-quoted with escapes.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if is_bareword(s) {
        return s.to_string();
    }
    if s.chars().any(char::is_control) {
        return double_quote(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

fn is_bareword_char(c: char) -> bool {
    c.is_alphanumeric() || "-_:%+,./@!".contains(c)
}

fn is_bareword(s: &str) -> bool {
    s.char_indices()
        .all(|(i, c)| is_bareword_char(c) || (c == '~' && i > 0))
}

fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x1b' => out.push_str("\\e"),
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xff {
                    let _ = write!(out, "\\x{code:02x}");
                } else {
                    let _ = write!(out, "\\u{{{code:x}}}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests;
