//! Filesystem navigation.
//!
//! The navigation mode shows three columns: the parent directory, the
//! current directory, and a preview of the selected entry. This module builds
//! those columns from a [`NavCursor`]; drawing them is the editor's job.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{EditError, EditResult};

/// What reading a file yields.
pub enum NavContent {
    /// A directory's entries, in no particular order.
    Dir(Vec<Box<dyn NavFile>>),
    /// A regular file's text.
    Text(String),
}

/// A file or directory the cursor can show.
pub trait NavFile {
    fn name(&self) -> String;
    /// Whether this is a directory, following symlinks.
    fn is_dir(&self) -> bool;
    fn read(&self) -> EditResult<NavContent>;
}

/// A position in a directory tree.
pub trait NavCursor {
    fn current(&self) -> EditResult<Box<dyn NavFile>>;
    fn parent(&self) -> EditResult<Box<dyn NavFile>>;
    fn ascend(&mut self) -> EditResult<()>;
    fn descend(&mut self, name: &str) -> EditResult<()>;
}

/// One entry of a listing column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub is_dir: bool,
}

/// One column of the navigation view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    Empty,
    /// The error hit while reading the column's file.
    Error(String),
    /// A directory listing, sorted by name.
    Listing {
        entries: Vec<NavEntry>,
        selected: Option<usize>,
    },
    /// Lines of a file preview.
    Text(Vec<String>),
}

impl Column {
    /// Select the entry called `name`, if this is a listing that has one.
    fn select_name(&mut self, name: &str) {
        if let Column::Listing { entries, selected } = self {
            if let Some(i) = entries.iter().position(|e| e.name == name) {
                *selected = Some(i);
            }
        }
    }

    fn select_nothing(&mut self) {
        if let Column::Listing { selected, .. } = self {
            *selected = None;
        }
    }

    /// The selected entry of a listing.
    pub fn selected(&self) -> Option<&NavEntry> {
        match self {
            Column::Listing {
                entries,
                selected: Some(i),
            } => entries.get(*i),
            _ => None,
        }
    }
}

/// The three columns of the navigation mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub parent: Column,
    pub current: Column,
    pub preview: Column,
}

impl NavView {
    /// Move the selection of the current column and refresh the preview.
    pub fn select(&mut self, cursor: &dyn NavCursor, index: usize) {
        if let Column::Listing { entries, selected } = &mut self.current {
            if index < entries.len() {
                *selected = Some(index);
            }
        }
        self.preview = preview_of(cursor, self.current.selected());
    }
}

/// Sort files by name.
pub fn sorted_by_name(mut files: Vec<Box<dyn NavFile>>) -> Vec<Box<dyn NavFile>> {
    files.sort_by_cached_key(|file| file.name());
    files
}

/// Make file text safe to show: tabs become four spaces, newlines stay, and
/// anything that does not draw a glyph is dropped.
pub fn sanitize_preview(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        if c == '\t' {
            out.push_str("    ");
        } else if c == '\n' || is_graphic(c) {
            out.push(c);
        }
    }
    out
}

/// Letters, marks, numbers, punctuation, symbols and space separators.
///
/// Rejects control, format, private-use and line/paragraph separator
/// characters.
fn is_graphic(c: char) -> bool {
    !(c.is_control()
        || is_format(c)
        || is_private_use(c)
        || matches!(c, '\u{2028}' | '\u{2029}'))
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}

fn column_of(file: &dyn NavFile) -> Column {
    match file.read() {
        Ok(NavContent::Dir(files)) => {
            let entries: Vec<NavEntry> = sorted_by_name(files)
                .iter()
                .map(|f| NavEntry {
                    name: f.name(),
                    is_dir: f.is_dir(),
                })
                .collect();
            let selected = if entries.is_empty() { None } else { Some(0) };
            Column::Listing { entries, selected }
        }
        Ok(NavContent::Text(text)) => Column::Text(
            sanitize_preview(&text)
                .split('\n')
                .map(str::to_string)
                .collect(),
        ),
        Err(err) => Column::Error(err.to_string()),
    }
}

fn preview_of(cursor: &dyn NavCursor, entry: Option<&NavEntry>) -> Column {
    let Some(entry) = entry else {
        return Column::Empty;
    };
    let files = match cursor.current().and_then(|current| current.read()) {
        Ok(NavContent::Dir(files)) => files,
        Ok(NavContent::Text(_)) => return Column::Empty,
        Err(err) => return Column::Error(err.to_string()),
    };
    files
        .iter()
        .find(|file| file.name() == entry.name)
        .map_or(Column::Empty, |file| column_of(file.as_ref()))
}

/// Build the view at the cursor, selecting `select_name` in the current
/// column when it is not empty.
pub fn nav_view(cursor: &dyn NavCursor, select_name: &str) -> NavView {
    let mut parent = match cursor.parent() {
        Ok(parent) => column_of(parent.as_ref()),
        Err(err) => Column::Error(err.to_string()),
    };

    let current = match cursor.current() {
        Ok(current) => {
            let mut column = column_of(current.as_ref());
            parent.select_name(&current.name());
            if !select_name.is_empty() {
                column.select_name(select_name);
            }
            column
        }
        Err(err) => {
            parent.select_nothing();
            Column::Error(err.to_string())
        }
    };

    let preview = preview_of(cursor, current.selected());
    NavView {
        parent,
        current,
        preview,
    }
}

/// Go to the parent directory, keeping the directory just left selected.
pub fn ascend(cursor: &mut dyn NavCursor) -> EditResult<NavView> {
    let current_name = cursor.current().map(|f| f.name()).unwrap_or_default();
    cursor.ascend()?;
    Ok(nav_view(&*cursor, &current_name))
}

/// Enter the selected entry of `view` if it is a directory.
///
/// `None` when nothing is selected or the selection is a plain file.
pub fn descend(cursor: &mut dyn NavCursor, view: &NavView) -> EditResult<Option<NavView>> {
    let Some(entry) = view.current.selected() else {
        return Ok(None);
    };
    if !entry.is_dir {
        return Ok(None);
    }
    cursor.descend(&entry.name)?;
    Ok(Some(nav_view(&*cursor, "")))
}

/// A cursor over the real filesystem.
#[derive(Clone, Debug)]
pub struct FsCursor {
    dir: PathBuf,
}

impl FsCursor {
    /// Start at `dir`, made absolute.
    pub fn new(dir: impl AsRef<Path>) -> EditResult<Self> {
        let dir = fs::canonicalize(dir)?;
        if !dir.is_dir() {
            return Err(EditError::NotDirectory(dir.display().to_string()));
        }
        Ok(FsCursor { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl NavCursor for FsCursor {
    fn current(&self) -> EditResult<Box<dyn NavFile>> {
        Ok(Box::new(FsFile::new(self.dir.clone())))
    }

    fn parent(&self) -> EditResult<Box<dyn NavFile>> {
        let parent = self.dir.parent().ok_or(EditError::AtRoot)?;
        Ok(Box::new(FsFile::new(parent.to_path_buf())))
    }

    fn ascend(&mut self) -> EditResult<()> {
        let parent = self.dir.parent().ok_or(EditError::AtRoot)?;
        self.dir = parent.to_path_buf();
        Ok(())
    }

    fn descend(&mut self, name: &str) -> EditResult<()> {
        let target = self.dir.join(name);
        if !target.is_dir() {
            return Err(EditError::NotDirectory(name.to_string()));
        }
        self.dir = target;
        Ok(())
    }
}

struct FsFile {
    path: PathBuf,
}

impl FsFile {
    fn new(path: PathBuf) -> Self {
        FsFile { path }
    }
}

impl NavFile for FsFile {
    fn name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    fn read(&self) -> EditResult<NavContent> {
        if self.is_dir() {
            let mut files: Vec<Box<dyn NavFile>> = Vec::new();
            for entry in fs::read_dir(&self.path)? {
                files.push(Box::new(FsFile::new(entry?.path())));
            }
            Ok(NavContent::Dir(files))
        } else {
            let bytes = fs::read(&self.path)?;
            Ok(NavContent::Text(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
