use super::geom::{Pos, Rect};
use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Drawing commands a backend replays. Every command is already clipped:
/// rectangles by their own extent, text by its `clip`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank cells in `style`.
    Fill { rect: Rect, style: Style },
    /// Every cell of `rect` set to `ch`: separator lines, half blocks, quadrants.
    Glyphs { rect: Rect, ch: char, style: Style },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Fill { rect, style });
    }

    pub fn fill_glyph(&mut self, rect: Rect, ch: char, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Glyphs { rect, ch, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        if clip.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip,
        });
    }
}

/// Lays `text` out on row `pos.y` from `pos.x`, calling `put(x, grapheme,
/// width)` for each grapheme inside `clip`. Zero-width graphemes are dropped;
/// a wide glyph that would cross the right edge ends the run.
pub fn layout_text(pos: Pos, text: &str, clip: Rect, mut put: impl FnMut(u16, &str, u16)) {
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = g.width() as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() || x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            put(x, g, w);
        }
        x = x.saturating_add(w);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
