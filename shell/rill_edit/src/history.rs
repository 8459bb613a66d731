//! History listing.
//!
//! The listing shows every stored command, narrowed by a substring filter
//! as the user types.

use rill_value::Value;

use crate::EditResult;

/// One stored command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub seq: usize,
    pub text: String,
}

impl HistoryEntry {
    pub fn new(seq: usize, text: impl Into<String>) -> Self {
        HistoryEntry {
            seq,
            text: text.into(),
        }
    }
}

/// Source of all stored commands, oldest first.
pub trait HistoryStore {
    fn all_cmds(&self) -> EditResult<Vec<HistoryEntry>>;
}

/// A history store held in memory. Sequence numbers start at 1.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        MemoryHistory::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = MemoryHistory::new();
        for line in lines {
            history.add(line);
        }
        history
    }

    /// Append a command, returning its sequence number.
    pub fn add(&mut self, text: impl Into<String>) -> usize {
        let seq = self.entries.len() + 1;
        self.entries.push(HistoryEntry::new(seq, text));
        seq
    }
}

impl HistoryStore for MemoryHistory {
    fn all_cmds(&self) -> EditResult<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}

/// Entries whose text contains `pattern`. An empty pattern keeps all.
pub fn filter_history<'a>(entries: &'a [HistoryEntry], pattern: &str) -> Vec<&'a HistoryEntry> {
    entries
        .iter()
        .filter(|entry| pattern.is_empty() || entry.text.contains(pattern))
        .collect()
}

/// One line of the listing: the sequence number right-aligned in four
/// columns, then the text.
pub fn show_entry(entry: &HistoryEntry) -> String {
    format!("{:>4} {}", entry.seq, entry.text)
}

/// The listing for `pattern`, as a list of display strings.
pub fn history_list(store: &dyn HistoryStore, pattern: &str) -> EditResult<Value> {
    let entries = store.all_cmds()?;
    let lines = filter_history(&entries, pattern)
        .into_iter()
        .map(|entry| Value::string(show_entry(entry)))
        .collect();
    Ok(Value::list(lines))
}

/// Insert an accepted entry into the edit buffer.
///
/// An empty buffer takes the text as is; otherwise it goes on a new line.
pub fn accept_entry(buffer: &mut String, text: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(text);
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
