use super::*;
use crate::ui::core::painter::PaintCmd;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

fn type_str(editor: &mut CellEditor, s: &str) {
    for ch in s.chars() {
        assert_eq!(editor.handle_key(key(KeyCode::Char(ch))), EditorEvent::Continue);
    }
}

#[test]
fn dispatch_follows_value_kind() {
    let text = CellEditor::open(&CellValue::from("abc"), "abc", -10, 10);
    assert_eq!(text.kind(), ValueKind::Text);
    let num = CellEditor::open(&CellValue::Int(3), "3", -10, 10);
    assert_eq!(num.kind(), ValueKind::Number);
    let float = CellEditor::open(&CellValue::Float(1.5), "1.5", -10, 10);
    assert_eq!(float.kind(), ValueKind::Number);
    let other = CellEditor::open(&CellValue::Bool(true), "yes", -10, 10);
    assert_eq!(other.kind(), ValueKind::Other);
    assert_eq!(other.value(), CellValue::from("yes"));
}

#[test]
fn text_enter_commits_and_advances_down() {
    let mut e = CellEditor::open(&CellValue::from("ab"), "ab", 0, 0);
    type_str(&mut e, "c");
    assert_eq!(
        e.handle_key(key(KeyCode::Enter)),
        EditorEvent::Commit {
            advance: Some((0, 1))
        }
    );
    assert_eq!(e.value(), CellValue::from("abc"));
}

#[test]
fn text_alt_enter_inserts_newline() {
    let mut e = CellEditor::open(&CellValue::from("ab"), "ab", 0, 0);
    assert_eq!(e.handle_key(alt(KeyCode::Enter)), EditorEvent::Continue);
    type_str(&mut e, "x");
    assert_eq!(e.value(), CellValue::from("ab\nx"));
    assert_eq!(e.cursor(), (1, 1));
}

#[test]
fn text_up_on_first_line_commits_upwards() {
    let mut e = CellEditor::open(&CellValue::from("a\nb"), "", 0, 0);
    // Cursor starts at the end of the last line.
    assert_eq!(e.handle_key(key(KeyCode::Up)), EditorEvent::Continue);
    assert_eq!(
        e.handle_key(key(KeyCode::Up)),
        EditorEvent::Commit {
            advance: Some((0, -1))
        }
    );
}

#[test]
fn text_left_at_line_start_commits_leftwards() {
    let mut e = CellEditor::open(&CellValue::from("ab"), "", 0, 0);
    assert_eq!(e.handle_key(key(KeyCode::Left)), EditorEvent::Continue);
    assert_eq!(e.handle_key(key(KeyCode::Left)), EditorEvent::Continue);
    assert_eq!(
        e.handle_key(key(KeyCode::Left)),
        EditorEvent::Commit {
            advance: Some((-1, 0))
        }
    );
}

#[test]
fn text_escape_cancels() {
    let mut e = CellEditor::open(&CellValue::from("ab"), "", 0, 0);
    assert_eq!(e.handle_key(key(KeyCode::Esc)), EditorEvent::Cancel);
}

#[test]
fn text_editing_respects_graphemes_and_width() {
    let mut e = CellEditor::open(&CellValue::from("a你"), "", 0, 0);
    assert_eq!(e.cursor(), (3, 0));
    e.handle_key(key(KeyCode::Backspace));
    assert_eq!(e.value(), CellValue::from("a"));
    e.handle_key(key(KeyCode::Home));
    type_str(&mut e, "é");
    assert_eq!(e.value(), CellValue::from("éa"));
    e.handle_key(key(KeyCode::Delete));
    assert_eq!(e.value(), CellValue::from("é"));
}

#[test]
fn text_backspace_joins_lines() {
    let mut e = CellEditor::open(&CellValue::from("ab\ncd"), "", 0, 0);
    e.handle_key(key(KeyCode::Home));
    e.handle_key(key(KeyCode::Backspace));
    assert_eq!(e.value(), CellValue::from("abcd"));
    assert_eq!(e.cursor(), (2, 0));
}

#[test]
fn ctrl_chars_are_not_inserted() {
    let mut e = CellEditor::open(&CellValue::from(""), "", 0, 0);
    e.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    e.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    assert_eq!(e.value(), CellValue::from("A"));
}

#[test]
fn formatted_editor_does_not_navigate_the_grid() {
    let mut e = CellEditor::open(&CellValue::Empty, "x", 0, 0);
    assert_eq!(e.handle_key(key(KeyCode::Up)), EditorEvent::Continue);
    assert_eq!(e.handle_key(key(KeyCode::Enter)), EditorEvent::COMMIT);
}

#[test]
fn number_editor_steps_and_clamps() {
    let mut e = CellEditor::open(&CellValue::Int(9), "9", -10, 10);
    e.handle_key(key(KeyCode::Up));
    assert_eq!(e.value(), CellValue::Int(10));
    e.handle_key(key(KeyCode::Up));
    assert_eq!(e.value(), CellValue::Int(10));
    e.handle_key(key(KeyCode::Down));
    assert_eq!(e.value(), CellValue::Int(9));
}

#[test]
fn number_editor_clamps_typed_values_on_commit() {
    let mut e = CellEditor::open(&CellValue::Int(0), "0", -1_000_000, 1_000_000);
    e.handle_key(key(KeyCode::Backspace));
    type_str(&mut e, "99999999");
    assert_eq!(e.handle_key(key(KeyCode::Enter)), EditorEvent::COMMIT);
    assert_eq!(e.value(), CellValue::Int(1_000_000));
}

#[test]
fn number_editor_keeps_floats_and_rejects_letters() {
    let mut e = CellEditor::open(&CellValue::Int(1), "1", -10, 10);
    type_str(&mut e, ".5");
    e.handle_key(key(KeyCode::Char('x')));
    assert_eq!(e.value(), CellValue::Float(1.5));
}

#[test]
fn number_editor_falls_back_on_garbage() {
    let mut e = CellEditor::open(&CellValue::Int(4), "4", -10, 10);
    e.handle_key(key(KeyCode::Backspace));
    e.handle_key(key(KeyCode::Char('-')));
    assert_eq!(e.value(), CellValue::Int(4));
}

#[test]
fn number_editor_is_one_line_tall() {
    let e = CellEditor::open(&CellValue::Int(4), "4", -10, 10);
    assert_eq!(e.size_over(8, 3), (8, 1));
    let t = CellEditor::open(&CellValue::from("a"), "a", -10, 10);
    assert_eq!(t.size_over(8, 3), (8, 3));
}

#[test]
fn release_events_are_ignored() {
    let mut e = CellEditor::open(&CellValue::from("a"), "a", 0, 0);
    let mut release = key(KeyCode::Esc);
    release.kind = KeyEventKind::Release;
    assert_eq!(e.handle_key(release), EditorEvent::Continue);
}

#[test]
fn paint_fills_area_and_reports_cursor() {
    let e = CellEditor::open(&CellValue::from("hi"), "hi", 0, 0);
    let mut p = Painter::new();
    let cursor = e.paint(&mut p, Rect::new(3, 2, 5, 1), Style::default());
    assert_eq!(cursor, Some(Pos::new(5, 2)));
    assert!(matches!(p.cmds()[0], PaintCmd::Fill { .. }));
    assert!(matches!(&p.cmds()[1], PaintCmd::Text { text, .. } if text == "hi"));

    let mut p = Painter::new();
    assert_eq!(e.paint(&mut p, Rect::new(3, 2, 0, 1), Style::default()), None);
    assert!(p.is_empty());
}
