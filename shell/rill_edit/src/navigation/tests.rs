use super::*;
use pretty_assertions::assert_eq;

#[derive(Clone)]
enum Node {
    Dir(Vec<(&'static str, Node)>),
    File(&'static str),
    Unreadable,
}

struct FakeFile {
    name: String,
    node: Node,
}

impl NavFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_dir(&self) -> bool {
        matches!(self.node, Node::Dir(_) | Node::Unreadable)
    }

    fn read(&self) -> EditResult<NavContent> {
        match &self.node {
            Node::Dir(children) => Ok(NavContent::Dir(
                children
                    .iter()
                    .map(|(name, node)| {
                        Box::new(FakeFile {
                            name: (*name).to_string(),
                            node: node.clone(),
                        }) as Box<dyn NavFile>
                    })
                    .collect(),
            )),
            Node::File(text) => Ok(NavContent::Text((*text).to_string())),
            Node::Unreadable => Err(EditError::Io("permission denied".to_string())),
        }
    }
}

struct FakeCursor {
    root: Node,
    path: Vec<&'static str>,
}

impl FakeCursor {
    fn file_at(&self, depth: usize) -> EditResult<Box<dyn NavFile>> {
        let mut node = self.root.clone();
        for name in &self.path[..depth] {
            let Node::Dir(children) = node else {
                return Err(EditError::NotDirectory((*name).to_string()));
            };
            node = children
                .into_iter()
                .find(|(n, _)| n == name)
                .map(|(_, child)| child)
                .ok_or_else(|| EditError::NotFound((*name).to_string()))?;
        }
        let name = if depth == 0 { "/" } else { self.path[depth - 1] };
        Ok(Box::new(FakeFile {
            name: name.to_string(),
            node,
        }))
    }
}

impl NavCursor for FakeCursor {
    fn current(&self) -> EditResult<Box<dyn NavFile>> {
        self.file_at(self.path.len())
    }

    fn parent(&self) -> EditResult<Box<dyn NavFile>> {
        if self.path.is_empty() {
            return Err(EditError::AtRoot);
        }
        self.file_at(self.path.len() - 1)
    }

    fn ascend(&mut self) -> EditResult<()> {
        self.path.pop().map(|_| ()).ok_or(EditError::AtRoot)
    }

    fn descend(&mut self, name: &str) -> EditResult<()> {
        let Some(name) = ["home", "docs", "etc"].into_iter().find(|n| *n == name) else {
            return Err(EditError::NotDirectory(name.to_string()));
        };
        self.path.push(name);
        Ok(())
    }
}

fn tree() -> Node {
    Node::Dir(vec![
        ("secret", Node::Unreadable),
        (
            "home",
            Node::Dir(vec![
                ("zed", Node::File("z")),
                (
                    "docs",
                    Node::Dir(vec![
                        ("b.txt", Node::File("b\tc\u{7}")),
                        ("a.txt", Node::File("hello\nworld")),
                    ]),
                ),
            ]),
        ),
        ("etc", Node::Dir(vec![])),
    ])
}

fn cursor_at(path: &[&'static str]) -> FakeCursor {
    FakeCursor {
        root: tree(),
        path: path.to_vec(),
    }
}

fn entry(name: &str, is_dir: bool) -> NavEntry {
    NavEntry {
        name: name.to_string(),
        is_dir,
    }
}

fn text(lines: &[&str]) -> Column {
    Column::Text(lines.iter().map(ToString::to_string).collect())
}

#[test]
fn test_sanitize_preview() {
    assert_eq!(sanitize_preview("a\tb"), "a    b");
    assert_eq!(sanitize_preview("x\u{7}y\r\n"), "xy\n");
    assert_eq!(sanitize_preview("héllo"), "héllo");
}

#[test]
fn test_sanitize_preview_drops_invisible() {
    assert_eq!(sanitize_preview("\u{FEFF}a\u{200B}b"), "ab");
    assert_eq!(sanitize_preview("l\u{202E}r\u{2028}\u{E000}"), "lr");
    assert_eq!(sanitize_preview("a\u{A0}b\u{3000}c"), "a\u{A0}b\u{3000}c");
    assert_eq!(sanitize_preview("e\u{301} ∑ 3"), "e\u{301} ∑ 3");
}

#[test]
fn test_view_columns() {
    let cursor = cursor_at(&["home"]);
    let view = nav_view(&cursor, "");

    assert_eq!(
        view.parent,
        Column::Listing {
            entries: vec![
                entry("etc", true),
                entry("home", true),
                entry("secret", true)
            ],
            selected: Some(1),
        }
    );
    assert_eq!(
        view.current,
        Column::Listing {
            entries: vec![entry("docs", true), entry("zed", false)],
            selected: Some(0),
        }
    );
    assert_eq!(
        view.preview,
        Column::Listing {
            entries: vec![entry("a.txt", false), entry("b.txt", false)],
            selected: Some(0),
        }
    );
}

#[test]
fn test_select_updates_preview() {
    let cursor = cursor_at(&["home"]);
    let mut view = nav_view(&cursor, "");
    view.select(&cursor, 1);
    assert_eq!(view.current.selected(), Some(&entry("zed", false)));
    assert_eq!(view.preview, text(&["z"]));

    // Out of range leaves the selection alone.
    view.select(&cursor, 9);
    assert_eq!(view.current.selected(), Some(&entry("zed", false)));
}

#[test]
fn test_select_name() {
    let cursor = cursor_at(&["home"]);
    let view = nav_view(&cursor, "zed");
    assert_eq!(view.current.selected(), Some(&entry("zed", false)));
    assert_eq!(view.preview, text(&["z"]));
}

#[test]
fn test_descend_and_preview_text() {
    let mut cursor = cursor_at(&["home"]);
    let view = nav_view(&cursor, "");
    let mut view = descend(&mut cursor, &view).unwrap().unwrap();
    assert_eq!(cursor.path, vec!["home", "docs"]);
    assert_eq!(view.parent.selected(), Some(&entry("docs", true)));
    assert_eq!(view.preview, text(&["hello", "world"]));

    view.select(&cursor, 1);
    assert_eq!(view.preview, text(&["b    c"]));

    // A plain file is not entered.
    assert_eq!(descend(&mut cursor, &view).unwrap(), None);
    assert_eq!(cursor.path, vec!["home", "docs"]);
}

#[test]
fn test_ascend_selects_left_directory() {
    let mut cursor = cursor_at(&["home"]);
    let view = ascend(&mut cursor).unwrap();
    assert!(cursor.path.is_empty());
    assert_eq!(view.current.selected(), Some(&entry("home", true)));
    assert_eq!(
        view.parent,
        Column::Error("already at the root".to_string())
    );

    assert_eq!(ascend(&mut cursor).unwrap_err(), EditError::AtRoot);
}

#[test]
fn test_unreadable_preview() {
    let cursor = cursor_at(&[]);
    let mut view = nav_view(&cursor, "secret");
    assert_eq!(
        view.preview,
        Column::Error("io error: permission denied".to_string())
    );
    view.select(&cursor, 0);
    assert_eq!(
        view.preview,
        Column::Listing {
            entries: vec![],
            selected: None,
        }
    );
}

#[test]
fn test_fs_cursor() {
    let root = std::env::temp_dir().join(format!("rill-nav-{}", std::process::id()));
    let sub = root.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(root.join("note.txt"), "one\ttwo").unwrap();

    let mut cursor = FsCursor::new(&root).unwrap();
    let view = nav_view(&cursor, "note.txt");
    assert_eq!(
        view.current,
        Column::Listing {
            entries: vec![entry("note.txt", false), entry("sub", true)],
            selected: Some(0),
        }
    );
    assert_eq!(view.preview, text(&["one    two"]));

    let view = nav_view(&cursor, "sub");
    let view = descend(&mut cursor, &view).unwrap().unwrap();
    assert_eq!(view.current, Column::Listing { entries: vec![], selected: None });
    assert!(cursor.dir().ends_with("sub"));

    assert!(matches!(
        cursor.descend("missing"),
        Err(EditError::NotDirectory(_))
    ));

    fs::remove_dir_all(&root).unwrap();
}
