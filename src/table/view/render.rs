//! Grid renderer.
//!
//! Geometry is computed in signed coordinates local to the view and clipped
//! per region (body, column header, row header, corner) on the way into the
//! painter. Only the visible row and column ranges are visited.
//!
//! Borders between two cells blend their backgrounds:
//!
//! ```text
//!   near bg == far bg     ─ / │ in the line colour on the shared background
//!   only near has bg      ▀ / ▌ in the near colour
//!   only far has bg       ▄ / ▐ in the far colour
//!   both, different       ▀ / ▌ near colour over far colour
//! ```

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{DragState, TableView};
use crate::table::hit_test::GridPos;
use crate::table::model::Axis;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Style};
use crate::ui::core::theme::TablePalette;

/// Quadrant glyphs indexed by selection bits: 1 this cell, 2 right,
/// 4 below, 8 below-right.
const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// Glyphs for one border orientation: plain line, near half, far half.
#[derive(Clone, Copy)]
struct BorderGlyphs {
    line: char,
    near: char,
    far: char,
}

const BOTTOM: BorderGlyphs = BorderGlyphs {
    line: '─',
    near: '▀',
    far: '▄',
};

const RIGHT: BorderGlyphs = BorderGlyphs {
    line: '│',
    near: '▌',
    far: '▐',
};

const JUNCTION: BorderGlyphs = BorderGlyphs {
    line: '┼',
    near: '▀',
    far: '▄',
};

fn fg_only(color: Color) -> Style {
    Style::default().fg(color)
}

/// Border glyph and style between a near cell and a far cell, given their
/// effective backgrounds.
fn blend(near: Option<Color>, far: Option<Color>, line: Style, glyphs: BorderGlyphs) -> (char, Style) {
    match (near, far) {
        (a, b) if a == b => match a {
            Some(bg) => (glyphs.line, line.bg(bg)),
            None => (glyphs.line, line),
        },
        (Some(a), None) => (glyphs.near, fg_only(a)),
        (None, Some(b)) => (glyphs.far, fg_only(b)),
        (Some(a), Some(b)) => (glyphs.near, Style::default().fg(a).bg(b)),
        (None, None) => (glyphs.line, line),
    }
}

/// Paint target translating view-local signed coordinates to the area.
struct Canvas<'p> {
    painter: &'p mut Painter,
    origin: (i32, i32),
}

impl Canvas<'_> {
    fn region(&self, x: i32, y: i32, w: i32, h: i32, clip: Rect) -> Option<Rect> {
        Rect::clip_signed(self.origin.0 + x, self.origin.1 + y, w, h, clip)
    }

    fn fill(&mut self, clip: Rect, x: i32, y: i32, w: i32, h: i32, style: Style) {
        if let Some(rect) = self.region(x, y, w, h, clip) {
            self.painter.fill_rect(rect, style);
        }
    }

    fn glyph(&mut self, clip: Rect, x: i32, y: i32, w: i32, h: i32, ch: char, style: Style) {
        if let Some(rect) = self.region(x, y, w, h, clip) {
            self.painter.fill_glyph(rect, ch, style);
        }
    }

    /// Text starting at `x`, limited to `width` columns. Columns left of the
    /// clip are skipped grapheme by grapheme.
    fn text(&mut self, clip: Rect, x: i32, y: i32, width: i32, text: &str, style: Style) {
        let Some(region) = self.region(x, y, width, 1, clip) else {
            return;
        };
        let start = self.origin.0 + x;
        let skip = region.x as i32 - start;
        let mut col = 0;
        let mut rest = text;
        for (i, g) in text.grapheme_indices(true) {
            if col >= skip {
                rest = &text[i..];
                break;
            }
            col += g.width() as i32;
            rest = &text[text.len()..];
            if col >= skip {
                rest = &text[i + g.len()..];
                break;
            }
        }
        if rest.is_empty() {
            return;
        }
        let pos = Pos::new((start + col) as u16, region.y);
        self.painter.text(pos, rest, style, region);
    }

    /// Bordered box with its frame on `xa..=xb`, `ya..=yb`.
    fn frame_box(&mut self, clip: Rect, (xa, xb): (i32, i32), (ya, yb): (i32, i32), style: Style) {
        if xb <= xa || yb <= ya {
            return;
        }
        let inner = xb - xa - 1;
        self.glyph(clip, xa, ya, 1, 1, '▗', style);
        self.glyph(clip, xa + 1, ya, inner, 1, '▄', style);
        self.glyph(clip, xb, ya, 1, 1, '▖', style);
        self.glyph(clip, xa, yb, 1, 1, '▝', style);
        self.glyph(clip, xa + 1, yb, inner, 1, '▀', style);
        self.glyph(clip, xb, yb, 1, 1, '▘', style);
        self.glyph(clip, xa, ya + 1, 1, yb - ya - 1, '▐', style);
        self.glyph(clip, xb, ya + 1, 1, yb - ya - 1, '▌', style);
    }
}

/// Everything one paint needs, resolved once.
struct GridFrame<'a> {
    view: &'a TableView,
    palette: &'a TablePalette,
    hx: i32,
    hy: i32,
    w: i32,
    h: i32,
    rows: usize,
    cols: usize,
    row_sep: bool,
    col_sep: bool,
    visible_rows: Range<usize>,
    visible_cols: Range<usize>,
    selected_inv: Style,
}

impl GridFrame<'_> {
    /// Content columns `[xa, xb)` of `col`; the separator sits at `xb`.
    fn cell_x(&self, col: usize) -> (i32, i32) {
        let (a, b) = self.view.layout.cols().extent(col).unwrap_or_default();
        let shift = self.hx - self.view.offset.0;
        (a + shift, b + shift)
    }

    fn cell_y(&self, row: usize) -> (i32, i32) {
        let (a, b) = self.view.layout.rows().extent(row).unwrap_or_default();
        let shift = self.hy - self.view.offset.1;
        (a + shift, b + shift)
    }

    /// Frame coordinates of a box around elements `first..=last` of `axis`:
    /// the separator before the first and the one after the last.
    fn span_frame(&self, axis: Axis, first: usize, last: usize) -> (i32, i32) {
        let layout = self.view.layout.axis(axis);
        let shift = match axis {
            Axis::Row => self.hy - self.view.offset.1,
            Axis::Column => self.hx - self.view.offset.0,
        };
        let a = layout.previous(first) + shift;
        let b = layout.boundary(last).unwrap_or_default() + shift + 1 - layout.gap();
        (a, b)
    }

    fn selected(&self, row: usize, col: usize) -> bool {
        self.view.selection.get(row, col)
    }

    /// Fill precedence: hover, then selection, then the row colour.
    fn cell_style(&self, row: usize, col: usize) -> Style {
        if self.view.hover.is_some_and(|h| h.covers(row, col)) {
            self.palette.hover
        } else if self.selected(row, col) {
            self.palette.selected
        } else {
            self.palette.row_style(row)
        }
    }

    fn bg(&self, row: usize, col: usize) -> Option<Color> {
        self.cell_style(row, col).background()
    }

    fn paint_cell(&self, canvas: &mut Canvas<'_>, body: Rect, row: usize, col: usize) {
        let (xa, xb) = self.cell_x(col);
        let (ya, yb) = self.cell_y(row);
        let style = self.cell_style(row, col);

        canvas.fill(body, xa, ya, xb - xa, yb - ya, style);
        let text = self.view.model.formatted_text(row, col);
        for (i, line) in text.split('\n').take((yb - ya).max(0) as usize).enumerate() {
            canvas.text(body, xa, ya + i as i32, xb - xa, line, style);
        }

        if self.row_sep {
            let (ch, s) = self.bottom_border(row, col, style);
            canvas.glyph(body, xa, yb, xb - xa, 1, ch, s);
        }
        if self.col_sep {
            let (ch, s) = self.right_border(row, col, style);
            canvas.glyph(body, xb, ya, 1, yb - ya, ch, s);
        }
        if self.row_sep && self.col_sep {
            let (ch, s) = self.corner(row, col, style);
            canvas.glyph(body, xb, yb, 1, 1, ch, s);
        }
    }

    /// Backgrounds of two neighbours, with a selection edge forced crisp:
    /// the unselected side counts as having no background.
    fn edge_backgrounds(
        &self,
        near: (usize, usize),
        far: (usize, usize),
        near_style: Style,
    ) -> (Option<Color>, Option<Color>) {
        let a = near_style.background();
        let b = self.bg(far.0, far.1);
        if !(self.row_sep && self.col_sep) {
            return (a, b);
        }
        match (self.selected(near.0, near.1), self.selected(far.0, far.1)) {
            (true, false) => (a, None),
            (false, true) => (None, b),
            _ => (a, b),
        }
    }

    fn bottom_border(&self, row: usize, col: usize, style: Style) -> (char, Style) {
        if row + 1 < self.rows {
            let (a, b) = self.edge_backgrounds((row, col), (row + 1, col), style);
            return blend(a, b, self.palette.line, BOTTOM);
        }
        if self.selected(row, col) {
            ('▀', self.selected_inv)
        } else if let Some(a) = style.background() {
            ('▀', fg_only(a))
        } else {
            ('─', self.palette.line)
        }
    }

    fn right_border(&self, row: usize, col: usize, style: Style) -> (char, Style) {
        if col + 1 < self.cols {
            let (a, c) = self.edge_backgrounds((row, col), (row, col + 1), style);
            return blend(a, c, self.palette.line, RIGHT);
        }
        if self.selected(row, col) {
            ('▌', self.selected_inv)
        } else if let Some(a) = style.background() {
            (' ', Style::default().bg(a))
        } else {
            ('│', self.palette.line)
        }
    }

    fn corner(&self, row: usize, col: usize, style: Style) -> (char, Style) {
        let has_right = col + 1 < self.cols;
        let has_below = row + 1 < self.rows;
        let bits = |r: usize, c: usize, bit: usize| if self.selected(r, c) { bit } else { 0 };

        let mut index = bits(row, col, 1);
        if has_right {
            index |= bits(row, col + 1, 2);
        }
        if has_below {
            index |= bits(row + 1, col, 4);
        }
        if has_right && has_below {
            index |= bits(row + 1, col + 1, 8);
        }

        let a = style.background();
        match (has_right, has_below) {
            (true, true) => {
                if index == 0 || index == 0x0F {
                    blend(a, self.bg(row + 1, col), self.palette.line, JUNCTION)
                } else {
                    (QUADRANTS[index], self.selected_inv)
                }
            }
            (true, false) => {
                if index != 0 {
                    (QUADRANTS[index], self.selected_inv)
                } else if let Some(a) = a {
                    ('▀', fg_only(a))
                } else {
                    ('┴', self.palette.line)
                }
            }
            (false, true) => {
                let b = self.bg(row + 1, col);
                if index != 0 {
                    (QUADRANTS[index], self.selected_inv)
                } else {
                    match (a, b) {
                        (None, None) => ('┤', self.palette.line),
                        (Some(a), None) => ('▀', fg_only(a)),
                        (None, Some(b)) => ('▄', fg_only(b)),
                        (Some(a), Some(b)) => ('▀', Style::default().fg(a).bg(b)),
                    }
                }
            }
            (false, false) => {
                if index != 0 {
                    (QUADRANTS[index], self.selected_inv)
                } else if let Some(a) = a {
                    ('▀', fg_only(a))
                } else {
                    ('┘', self.palette.line)
                }
            }
        }
    }

    fn paint_overlays(&self, canvas: &mut Canvas<'_>, body: Rect) {
        let hover_inv = self.palette.hover.background_style().invert();
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;

        if let Some(hover) = self.view.hover.filter(|h| h.fits(self.rows, self.cols)) {
            let (r0, r1) = hover.row().map_or((0, last_row), |r| (r, r));
            let (c0, c1) = hover.col().map_or((0, last_col), |c| (c, c));
            canvas.frame_box(
                body,
                self.span_frame(Axis::Column, c0, c1),
                self.span_frame(Axis::Row, r0, r1),
                hover_inv,
            );
        }

        let drag_span = match self.view.drag {
            DragState::Cells { anchor, current } => Some((
                (anchor.0.min(current.0), anchor.0.max(current.0)),
                (anchor.1.min(current.1), anchor.1.max(current.1)),
            )),
            DragState::Headers {
                anchor: GridPos::RowHeader(row),
                current,
            } => Some(((row.min(current.0), row.max(current.0)), (0, last_col))),
            DragState::Headers {
                anchor: GridPos::ColumnHeader(col),
                current,
            } => Some(((0, last_row), (col.min(current.1), col.max(current.1)))),
            _ => None,
        };
        if let Some(((r0, r1), (c0, c1))) = drag_span {
            if r1 < self.rows && c1 < self.cols {
                canvas.frame_box(
                    body,
                    self.span_frame(Axis::Column, c0, c1),
                    self.span_frame(Axis::Row, r0, r1),
                    hover_inv,
                );
            }
        }

        if let Some((row, col)) = self.view.current {
            if row < self.rows && col < self.cols {
                canvas.frame_box(
                    body,
                    self.span_frame(Axis::Column, col, col),
                    self.span_frame(Axis::Row, row, row),
                    self.palette.current.background_style().invert(),
                );
            }
        }
    }

    fn paint_column_header(&self, canvas: &mut Canvas<'_>, clip: Rect) {
        let style = self.palette.header;
        for col in self.visible_cols.clone() {
            let (xa, xb) = self.cell_x(col);
            let label = self.view.model.header_label(col, Axis::Column);
            canvas.fill(clip, xa, 0, xb - xa, self.hy, style);
            canvas.text(clip, xa, 0, xb - xa, &label, style);
            if let Some((sort_col, order)) = self.view.sort {
                if sort_col == col && xb - xa >= 1 {
                    let glyph = match order {
                        super::SortOrder::Ascending => '▼',
                        super::SortOrder::Descending => '▲',
                    };
                    canvas.glyph(clip, xb - 1, 0, 1, 1, glyph, style);
                }
            }
            if self.col_sep {
                canvas.glyph(clip, xb, 0, 1, 1, '╿', style);
            }
        }
    }

    fn paint_row_header(&self, canvas: &mut Canvas<'_>, clip: Rect) {
        let style = self.palette.header;
        let sep = self.palette.separator;
        let edge = self.hx - 1;
        for row in self.visible_rows.clone() {
            let (ya, yb) = self.cell_y(row);
            let label = self.view.model.header_label(row, Axis::Row);
            canvas.fill(clip, 0, ya, edge, yb - ya, style);
            canvas.text(clip, 0, ya, edge, &label, style);
            canvas.glyph(clip, edge, ya, 1, yb - ya, '▐', sep);
            if self.row_sep {
                if edge >= 1 {
                    canvas.glyph(clip, 0, yb, 1, 1, '╾', style);
                    canvas.glyph(clip, 1, yb, edge - 1, 1, '╌', style);
                }
                canvas.glyph(clip, edge, yb, 1, 1, '▐', sep);
            }
        }
    }
}

impl TableView {
    /// Paints the table into `area` using `palette`.
    ///
    /// The view adopts the area's size as its viewport. Returns the cursor
    /// position of the open editor, if it is visible.
    pub fn paint(&mut self, painter: &mut Painter, area: Rect, palette: &TablePalette) -> Option<Pos> {
        self.sync_shape();
        self.set_viewport(area.w, area.h);
        if self.layout.is_empty() || area.is_empty() {
            return None;
        }

        let hx = self.layout.header_x();
        let hy = self.layout.header_y();
        let (w, h) = (area.w as i32, area.h as i32);
        if w <= hx || h <= hy {
            return None;
        }
        let (ox, oy) = self.offset;
        let visible_rows = self.layout.rows().visible(oy, oy + h - hy)?;
        let visible_cols = self.layout.cols().visible(ox, ox + w - hx)?;

        let frame = GridFrame {
            view: self,
            palette,
            hx,
            hy,
            w,
            h,
            rows: self.shape.0,
            cols: self.shape.1,
            row_sep: self.layout.separator_visible(Axis::Row),
            col_sep: self.layout.separator_visible(Axis::Column),
            visible_rows,
            visible_cols,
            selected_inv: palette.selected.background_style().invert(),
        };
        let mut canvas = Canvas {
            painter,
            origin: (area.x as i32, area.y as i32),
        };
        let region = |x: i32, y: i32, rw: i32, rh: i32| {
            Rect::clip_signed(area.x as i32 + x, area.y as i32 + y, rw, rh, area).unwrap_or_default()
        };
        let body = region(hx, hy, w - hx, h - hy);

        for row in frame.visible_rows.clone() {
            for col in frame.visible_cols.clone() {
                frame.paint_cell(&mut canvas, body, row, col);
            }
        }
        frame.paint_overlays(&mut canvas, body);

        if hy > 0 {
            frame.paint_column_header(&mut canvas, region(hx, 0, frame.w - hx, hy));
        }
        if hx > 0 {
            frame.paint_row_header(&mut canvas, region(0, hy, hx, frame.h - hy));
        }
        if hx > 0 && hy > 0 {
            canvas.fill(region(0, 0, hx, hy), 0, 0, hx, hy, palette.separator.invert());
        }

        let edit = self.pending.as_ref()?;
        let (x, y, ew, eh) = self.editor_rect()?;
        let rect = Rect::clip_signed(area.x as i32 + x, area.y as i32 + y, ew, eh, body)?;
        edit.editor.paint(canvas.painter, rect, palette.row_style(edit.row))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/table/view/render.rs"]
mod tests;
