use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

fn replay(w: u16, h: u16, painter: &Painter) -> TestBackend {
    let mut backend = TestBackend::new(w, h);
    backend.draw(Rect::new(0, 0, w, h), painter.cmds());
    backend
}

#[test]
fn wide_glyph_that_does_not_fit_is_dropped() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "表", Style::default(), Rect::new(0, 0, 1, 1));
    assert_eq!(replay(1, 1, &p).buffer().row_text(0), " ");
}

#[test]
fn wide_glyph_blanks_its_trailing_cell() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    buf.cell_mut(1, 0).unwrap().symbol = "x".to_string();
    draw_text(&mut buf, Pos::new(0, 0), "表", Style::default(), Rect::new(0, 0, 3, 1));
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "表");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn text_clip_is_limited_to_the_buffer() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "abcdef", Style::default(), Rect::new(0, 0, 40, 1));
    assert_eq!(replay(4, 1, &p).buffer().row_text(0), "abcd");
}

#[test]
fn fills_clip_to_buffer_area() {
    let style = Style::default().bg(Color::Indexed(4));
    let mut p = Painter::new();
    p.fill_glyph(Rect::new(0, 0, 10, 10), '▀', Style::default());
    p.fill_rect(Rect::new(1, 1, 10, 10), style);
    let backend = replay(2, 2, &p);
    assert_eq!(backend.buffer().row_text(0), "▀▀");
    assert_eq!(backend.buffer().row_text(1), "▀ ");
    assert_eq!(backend.buffer().cell(1, 1).unwrap().style, style);
}

#[test]
fn commands_replay_in_order() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 4, 1), Style::default());
    p.text(Pos::new(0, 0), "ab", Style::default(), Rect::new(0, 0, 4, 1));
    p.fill_glyph(Rect::new(1, 0, 1, 1), '│', Style::default());
    assert_eq!(replay(4, 1, &p).buffer().row_text(0), "a│  ");
}

#[test]
fn cursor_is_recorded() {
    let mut backend = TestBackend::new(2, 2);
    backend.set_cursor(Some(Pos::new(1, 0)));
    assert_eq!(backend.cursor(), Some(Pos::new(1, 0)));
}
