//! Rill Glob - glob pattern descriptions for the rill shell.
//!
//! This crate builds the structured description of a wildcard word
//! (`src/**/*.rs`, `~/a?c`) that a separate matching engine consumes.
//! It does not touch the filesystem and does not match anything itself.
//!
//! # Building Blocks
//!
//! - [`wildcard_to_segment`]: maps a wildcard token already recognised by the
//!   parser (`*`, `**`, `?`) to its segment
//! - [`string_to_segments`]: splits literal text on `/`
//! - [`parse_wildcards`]: tokenises a whole word and runs it through both
//!
//! ```
//! use rill_glob::{string_to_segments, Segment};
//!
//! assert_eq!(
//!     string_to_segments("a//b"),
//!     vec![Segment::literal("a"), Segment::Slash, Segment::literal("b")],
//! );
//! ```

mod pattern;

pub use pattern::{parse_wildcards, string_to_segments, wildcard_to_segment, Pattern, Segment};

use thiserror::Error;

/// Errors raised while building a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    /// A token that is not one of `*`, `**` or `?` reached the wildcard mapper.
    #[error("bad wildcard: {0:?}")]
    BadWildcard(String),
}
