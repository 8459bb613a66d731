//! Rill Edit - what the line editor asks of the rest of the shell.
//!
//! The editor itself (terminal, widgets, rendering) lives elsewhere. This
//! crate holds the pieces it shares with the shell core:
//!
//! - `keys`: decoded key events and the mapping from raw control runes
//! - `history`: the history store and the listing filter
//! - `navigation`: the filesystem cursor behind the navigation mode, and the
//!   three-column view built from it

mod history;
mod keys;
mod navigation;

pub use history::{
    accept_entry, filter_history, history_list, show_entry, HistoryEntry, HistoryStore,
    MemoryHistory,
};
pub use keys::{Key, KeyCode, KeySource, RuneKeys};
pub use navigation::{
    ascend, descend, nav_view, sanitize_preview, sorted_by_name, Column, FsCursor, NavContent,
    NavCursor, NavEntry, NavFile, NavView,
};

use thiserror::Error;

/// Result type for editor collaborator operations.
pub type EditResult<T> = Result<T, EditError>;

/// Errors raised by history stores and navigation cursors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no history store")]
    NoStore,
    #[error("db error: {0}")]
    Store(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotDirectory(String),
    #[error("already at the root")]
    AtRoot,
    #[error("end of input")]
    Eof,
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EditError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => EditError::NotFound(err.to_string()),
            _ => EditError::Io(err.to_string()),
        }
    }
}
