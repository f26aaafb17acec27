use super::*;

/// Columns and concatenated graphemes that `layout_text` places.
fn placed(pos: Pos, text: &str, clip: Rect) -> (Vec<u16>, String) {
    let mut xs = Vec::new();
    let mut out = String::new();
    layout_text(pos, text, clip, |x, g, _| {
        xs.push(x);
        out.push_str(g);
    });
    (xs, out)
}

#[test]
fn empty_areas_record_nothing() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 0, 3), Style::default());
    p.fill_glyph(Rect::new(4, 1, 2, 0), '─', Style::default());
    p.text(Pos::new(0, 0), "x", Style::default(), Rect::new(0, 0, 0, 0));
    assert!(p.is_empty());
}

#[test]
fn glyph_fill_is_one_command() {
    let mut p = Painter::new();
    p.fill_glyph(Rect::new(2, 3, 1, 4), '│', Style::default());
    assert_eq!(
        p.cmds(),
        &[PaintCmd::Glyphs {
            rect: Rect::new(2, 3, 1, 4),
            ch: '│',
            style: Style::default()
        }]
    );
}

#[test]
fn layout_skips_graphemes_left_of_clip() {
    let clip = Rect::new(2, 0, 3, 1);
    assert_eq!(placed(Pos::new(0, 0), "abcdef", clip), (vec![2, 3, 4], "cde".to_string()));
}

#[test]
fn layout_stops_before_wide_glyph_crossing_edge() {
    let clip = Rect::new(0, 0, 3, 1);
    assert_eq!(placed(Pos::new(0, 0), "a表表", clip), (vec![0, 1], "a表".to_string()));
}

#[test]
fn layout_ignores_rows_outside_clip() {
    assert!(placed(Pos::new(0, 5), "abc", Rect::new(0, 0, 10, 2)).0.is_empty());
}
