//! Segments and patterns.

use std::fmt;

use crate::GlobError;

/// One piece of a glob pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text containing no `/`.
    Literal(String),
    /// A path separator. Runs of `/` collapse into one.
    Slash,
    /// `*`: any run of characters within one path component.
    Star,
    /// `**`: any run of characters, crossing path components.
    StarStar,
    /// `?`: exactly one character.
    Question,
}

impl Segment {
    /// Create a literal segment.
    #[inline]
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    /// Whether this segment is one of the wildcard kinds.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Star | Segment::StarStar | Segment::Question)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Slash => f.write_str("/"),
            Segment::Star => f.write_str("*"),
            Segment::StarStar => f.write_str("**"),
            Segment::Question => f.write_str("?"),
        }
    }
}

/// An ordered sequence of segments.
///
/// Patterns are ephemeral: one is built while a single wildcard word is
/// expanded and then handed to the matcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Create an empty pattern.
    pub fn new() -> Self {
        Pattern::default()
    }

    /// Create a pattern from segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Pattern { segments }
    }

    /// Append segments at the end.
    pub fn append(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.segments.extend(segments);
    }

    /// The segments in order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern contains any wildcard segment.
    ///
    /// A word without wildcards needs no expansion at all.
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Consume the pattern, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Map a wildcard token to its segment.
///
/// Only the parser's wildcard tokens may reach this function; any other text
/// is a defect in the caller.
pub fn wildcard_to_segment(token: &str) -> Result<Segment, GlobError> {
    match token {
        "*" => Ok(Segment::Star),
        "**" => Ok(Segment::StarStar),
        "?" => Ok(Segment::Question),
        _ => Err(GlobError::BadWildcard(token.to_string())),
    }
}

/// Split literal text on `/` into literal and slash segments.
///
/// Consecutive separators produce a single [`Segment::Slash`]. Empty input
/// yields no segments.
pub fn string_to_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest.find('/').unwrap_or(rest.len());
        if end > 0 {
            segments.push(Segment::literal(&rest[..end]));
        }
        if end == rest.len() {
            break;
        }
        segments.push(Segment::Slash);
        rest = rest[end..].trim_start_matches('/');
    }
    segments
}

/// Build a pattern from a whole wildcard word.
///
/// `**` is recognised greedily before `*`, so `***` is `**` followed by `*`.
pub fn parse_wildcards(word: &str) -> Result<Pattern, GlobError> {
    let mut pattern = Pattern::new();
    let mut literal_start = 0;
    let mut chars = word.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let token_len = match c {
            '*' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                2
            }
            '*' | '?' => 1,
            _ => continue,
        };
        pattern.append(string_to_segments(&word[literal_start..i]));
        pattern.append([wildcard_to_segment(&word[i..i + token_len])?]);
        literal_start = i + token_len;
    }
    pattern.append(string_to_segments(&word[literal_start..]));

    Ok(pattern)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
