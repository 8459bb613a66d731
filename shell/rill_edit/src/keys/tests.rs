use super::*;
use pretty_assertions::assert_eq;

fn name(r: char) -> String {
    Key::from_control_rune(r).to_string()
}

#[test]
fn test_special_control_runes() {
    assert_eq!(name('\u{0}'), "Ctrl-`");
    assert_eq!(name('\u{1d}'), "Ctrl-6");
    assert_eq!(name('\u{1f}'), "Ctrl-/");
    assert_eq!(
        Key::from_control_rune('\u{7f}'),
        Key::plain(KeyCode::Backspace)
    );
}

#[test]
fn test_ctrl_letters() {
    assert_eq!(name('\u{1}'), "Ctrl-A");
    assert_eq!(name('\u{3}'), "Ctrl-C");
    assert_eq!(name('\u{1b}'), "Ctrl-[");
    assert_eq!(name('\u{1c}'), "Ctrl-\\");
}

#[test]
fn test_plain_runes() {
    assert_eq!(name('a'), "a");
    assert_eq!(name('é'), "é");
    // 0x1e has no chord of its own.
    assert_eq!(Key::from_control_rune('\u{1e}'), Key::plain(KeyCode::Char('\u{1e}')));
}

#[test]
fn test_display_modifiers() {
    assert_eq!(Key::ctrl(KeyCode::Char('x')).with_alt().to_string(), "Ctrl-Alt-x");
    assert_eq!(Key::plain(KeyCode::F(5)).to_string(), "F5");
    assert_eq!(Key::plain(KeyCode::PageDown).with_alt().to_string(), "Alt-PageDown");
}

#[test]
fn test_rune_keys_read_ahead() {
    let mut keys = RuneKeys::new("a\u{1}".chars());
    keys.unread(Key::plain(KeyCode::Up));
    assert_eq!(keys.read_key().unwrap(), Key::plain(KeyCode::Up));
    assert_eq!(keys.read_key().unwrap(), Key::plain(KeyCode::Char('a')));
    assert_eq!(keys.read_key().unwrap(), Key::ctrl(KeyCode::Char('A')));
    assert_eq!(keys.read_key(), Err(EditError::Eof));
}
