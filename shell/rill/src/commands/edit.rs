//! Commands for the line editor's collaborators.

use rill_edit::{
    history_list, nav_view, Column, EditError, FsCursor, KeySource, MemoryHistory, RuneKeys,
};
use rill_value::to_string;

use super::read_input;

/// List history from a file of commands, one per line, filtered by `pattern`.
pub fn history_command(path: &str, pattern: &str, out: &mut Vec<String>) -> Result<(), String> {
    let text = read_input(path)?;
    let store = MemoryHistory::from_lines(text.lines());
    let list = history_list(&store, pattern).map_err(|e| e.to_string())?;
    out.extend(list.to_vec().unwrap_or_default().iter().map(to_string));
    Ok(())
}

/// Name every key in `text` as if it had been typed in raw mode.
pub fn keys_command(text: &str, out: &mut Vec<String>) -> Result<(), String> {
    let mut keys = RuneKeys::new(text.chars());
    let mut names = Vec::new();
    loop {
        match keys.read_key() {
            Ok(key) => names.push(key.to_string()),
            Err(EditError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        }
    }
    out.push(names.join(" "));
    Ok(())
}

/// Show the three navigation columns for `dir`.
pub fn nav_command(dir: &str, out: &mut Vec<String>) -> Result<(), String> {
    let cursor = FsCursor::new(dir).map_err(|e| format!("{dir}: {e}"))?;
    let view = nav_view(&cursor, "");
    for (title, column) in [
        ("parent", &view.parent),
        ("current", &view.current),
        ("preview", &view.preview),
    ] {
        out.push(format!("{title}:"));
        show_column(column, out);
    }
    Ok(())
}

fn show_column(column: &Column, out: &mut Vec<String>) {
    match column {
        Column::Empty => {}
        Column::Error(message) => out.push(format!("  ! {message}")),
        Column::Listing { entries, selected } => {
            for (i, entry) in entries.iter().enumerate() {
                let mark = if *selected == Some(i) { '>' } else { ' ' };
                let slash = if entry.is_dir { "/" } else { "" };
                out.push(format!(" {mark}{}{slash}", entry.name));
            }
        }
        Column::Text(lines) => out.extend(lines.iter().map(|line| format!("  {line}"))),
    }
}
