//! Coordinate model.
//!
//! Each axis is a strictly increasing list of boundaries: boundary `i` is the
//! last cell occupied by element `i` (its separator line when separators are
//! shown). The element before the first ends at [`ORIGIN`], so element `i`
//! spans `boundary[i] - boundary[i - 1]` cells including its separator gap.
//!
//! ```text
//!  separators on            separators off
//!  -1  ─ origin             -1  ─ origin
//!   0  row 0 content         0  row 0
//!   1  ───────── b[0]        1  row 0      b[0] (default height quirk)
//!   2  row 1 content         2  row 1      b[1]
//!   3  ───────── b[1]
//! ```

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use super::config::TableConfig;
use super::error::{TableError, TableResult};
use super::model::{Axis, TableModel};

/// Boundary of the element before the first one.
pub const ORIGIN: i32 = -1;

/// Thickness of the column header band.
pub const COLUMN_HEADER_HEIGHT: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLayout {
    axis: Axis,
    bounds: Vec<i32>,
    separated: bool,
}

impl AxisLayout {
    /// Default column boundaries: `(i + 1) * (width + gap)`.
    pub fn columns(count: usize, width: usize, separated: bool) -> Self {
        let step = width as i32 + i32::from(separated);
        Self {
            axis: Axis::Column,
            bounds: (0..count as i32).map(|i| (i + 1) * step).collect(),
            separated,
        }
    }

    /// Default row boundaries: `height + i * (height + gap)`, i.e. `1 + 2i`
    /// separated and `1 + i` otherwise for single-line rows.
    pub fn rows(count: usize, height: usize, separated: bool) -> Self {
        let h = height as i32;
        let step = h + i32::from(separated);
        Self {
            axis: Axis::Row,
            bounds: (0..count as i32).map(|i| h + i * step).collect(),
            separated,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn bounds(&self) -> &[i32] {
        &self.bounds
    }

    pub fn is_separated(&self) -> bool {
        self.separated
    }

    pub fn gap(&self) -> i32 {
        i32::from(self.separated)
    }

    pub fn boundary(&self, index: usize) -> Option<i32> {
        self.bounds.get(index).copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.bounds.last().copied()
    }

    /// Boundary of the element preceding `index`.
    pub fn previous(&self, index: usize) -> i32 {
        match index {
            0 => ORIGIN,
            i => self.bounds.get(i - 1).copied().unwrap_or(ORIGIN),
        }
    }

    pub fn span(&self, index: usize) -> Option<i32> {
        Some(self.boundary(index)? - self.previous(index))
    }

    /// Content size of `index`, excluding the separator gap.
    pub fn size(&self, index: usize) -> Option<i32> {
        Some(self.span(index)? - self.gap())
    }

    /// Content extent `[start, end)` of `index` in content coordinates.
    pub fn extent(&self, index: usize) -> Option<(i32, i32)> {
        let end = self.boundary(index)? + 1 - self.gap();
        Some((self.previous(index) + 1, end))
    }

    fn check(&self, index: usize) -> TableResult<()> {
        if index < self.bounds.len() {
            return Ok(());
        }
        let len = self.bounds.len();
        Err(match self.axis {
            Axis::Row => TableError::RowOutOfRange { index, len },
            Axis::Column => TableError::ColumnOutOfRange { index, len },
        })
    }

    /// Sets the content size of `index` and shifts every later boundary by
    /// the same delta. Earlier boundaries are untouched.
    pub fn set_size(&mut self, index: usize, size: usize) -> TableResult<()> {
        self.check(index)?;
        if size == 0 {
            return Err(TableError::InvalidSize { size });
        }
        let new_pos = self.previous(index) + size as i32 + self.gap();
        let diff = new_pos - self.bounds[index];
        for b in &mut self.bounds[index..] {
            *b += diff;
        }
        Ok(())
    }

    /// Rebuilds every boundary from explicit content sizes.
    pub fn set_sizes(&mut self, sizes: &[usize]) -> TableResult<()> {
        if sizes.len() != self.bounds.len() {
            return Err(TableError::InvalidSize { size: sizes.len() });
        }
        if let Some(&size) = sizes.iter().find(|&&s| s == 0) {
            return Err(TableError::InvalidSize { size });
        }
        let gap = self.gap();
        let mut pos = ORIGIN;
        for (b, &size) in self.bounds.iter_mut().zip(sizes) {
            pos += gap + size as i32;
            *b = pos;
        }
        Ok(())
    }

    /// Adds or removes the one-cell gap of every element without changing
    /// content sizes: boundary `i` moves by `i + 1`.
    pub fn set_separated(&mut self, separated: bool) {
        if self.separated == separated {
            return;
        }
        self.separated = separated;
        let sign = if separated { 1 } else { -1 };
        for (i, b) in self.bounds.iter_mut().enumerate() {
            *b += sign * (i as i32 + 1);
        }
    }

    /// First element whose boundary is `>= coord`, clamped to the last one.
    ///
    /// Uses a binary search over the boundaries, so the cost stays
    /// logarithmic for models much larger than the viewport.
    pub fn locate(&self, coord: i32) -> Option<usize> {
        if self.bounds.is_empty() {
            return None;
        }
        let idx = self.bounds.partition_point(|&b| b < coord);
        Some(idx.min(self.bounds.len() - 1))
    }

    /// Separator exactly under `coord`, if separators are shown.
    pub fn separator_at(&self, coord: i32) -> Option<usize> {
        if !self.separated {
            return None;
        }
        self.bounds.binary_search(&coord).ok()
    }

    /// Elements whose span (separator included) intersects `[start, end)`.
    pub fn visible(&self, start: i32, end: i32) -> Option<Range<usize>> {
        if self.bounds.is_empty() || end <= start {
            return None;
        }
        let first = self.bounds.partition_point(|&b| b < start);
        if first >= self.bounds.len() {
            return None;
        }
        if self.previous(first) + 1 >= end {
            return None;
        }
        // Elements starting before `end`: previous boundary < end - 1.
        let last = self.bounds.partition_point(|&b| b < end - 1);
        let last = last.min(self.bounds.len() - 1);
        Some(first..last + 1)
    }

    /// Moves separator `index` to `coord` while dragging.
    ///
    /// The new position never drops below `(index + 1) * min_span` (minus one
    /// on the row axis, whose first boundary sits on line 1). Earlier
    /// boundaries are pushed so each stays at least `min_span` below its
    /// successor; later boundaries shift by the same delta. Boundaries stay
    /// strictly increasing throughout.
    pub fn drag_separator(&mut self, index: usize, coord: i32, min_span: usize) -> TableResult<()> {
        self.check(index)?;
        let unit = min_span.max(1) as i32;
        let ss = index as i32;
        let floor = (ss + 1) * unit - i32::from(self.axis == Axis::Row);
        let pos = coord.max(floor);
        let diff = pos - self.bounds[index];
        for (i, b) in self.bounds[..index].iter_mut().enumerate() {
            *b = (*b).min(pos - (ss - i as i32) * unit);
        }
        for b in &mut self.bounds[index..] {
            *b += diff;
        }
        Ok(())
    }
}

/// Coordinate model of a whole table: both axes plus the header bands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    rows: AxisLayout,
    cols: AxisLayout,
    row_header_width: i32,
    show_row_header: bool,
    show_column_header: bool,
    default_column_width: usize,
    default_row_height: usize,
}

impl TableLayout {
    pub fn new(model: &dyn TableModel, config: &TableConfig) -> Self {
        let mut layout = Self {
            rows: AxisLayout::rows(0, config.default_row_height, config.show_row_separators),
            cols: AxisLayout::columns(
                0,
                config.default_column_width,
                config.show_column_separators,
            ),
            row_header_width: 1,
            show_row_header: config.show_row_header,
            show_column_header: config.show_column_header,
            default_column_width: config.default_column_width.max(1),
            default_row_height: config.default_row_height.max(1),
        };
        layout.recompute(model);
        layout
    }

    /// Rebuilds both axes with default sizes from the model's shape.
    ///
    /// The row header width scans every row label, not just the visible
    /// ones, so this is O(rows).
    pub fn recompute(&mut self, model: &dyn TableModel) {
        let rows = model.row_count();
        let cols = model.column_count();
        self.row_header_width = 1 + (0..rows)
            .map(|r| model.header_label(r, Axis::Row).width() as i32)
            .max()
            .unwrap_or(0);
        self.rows = AxisLayout::rows(rows, self.default_row_height, self.rows.is_separated());
        self.cols = AxisLayout::columns(cols, self.default_column_width, self.cols.is_separated());
    }

    pub fn rows(&self) -> &AxisLayout {
        &self.rows
    }

    pub fn cols(&self) -> &AxisLayout {
        &self.cols
    }

    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisLayout {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    pub fn header_visible(&self, axis: Axis) -> bool {
        match axis {
            Axis::Row => self.show_row_header,
            Axis::Column => self.show_column_header,
        }
    }

    pub fn set_header_visible(&mut self, axis: Axis, visible: bool) {
        match axis {
            Axis::Row => self.show_row_header = visible,
            Axis::Column => self.show_column_header = visible,
        }
    }

    pub fn separator_visible(&self, axis: Axis) -> bool {
        self.axis(axis).is_separated()
    }

    pub fn set_separator_visible(&mut self, axis: Axis, visible: bool) {
        self.axis_mut(axis).set_separated(visible);
    }

    /// Row header width as computed, regardless of visibility.
    pub fn row_header_width(&self) -> i32 {
        self.row_header_width
    }

    /// Horizontal padding taken by the row header (0 when hidden).
    pub fn header_x(&self) -> i32 {
        if self.show_row_header {
            self.row_header_width
        } else {
            0
        }
    }

    /// Vertical padding taken by the column header (0 when hidden).
    pub fn header_y(&self) -> i32 {
        if self.show_column_header {
            COLUMN_HEADER_HEIGHT
        } else {
            0
        }
    }

    /// Total content size including headers: `header + last boundary + 1`.
    pub fn full_size(&self) -> (i32, i32) {
        let w = self.header_x() + self.cols.last().unwrap_or(ORIGIN) + 1;
        let h = self.header_y() + self.rows.last().unwrap_or(ORIGIN) + 1;
        (w, h)
    }
}

/// Widest line of `col` over `rows`, at least 1.
pub fn measure_column(model: &dyn TableModel, col: usize, rows: Range<usize>) -> usize {
    rows.map(|r| {
        model
            .formatted_text(r, col)
            .split('\n')
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    })
    .max()
    .unwrap_or(0)
    .max(1)
}

/// Tallest cell of `row` over `cols` in lines, at least 1.
pub fn measure_row(model: &dyn TableModel, row: usize, cols: Range<usize>) -> usize {
    cols.map(|c| model.formatted_text(row, c).split('\n').count())
        .max()
        .unwrap_or(0)
        .max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/table/layout.rs"]
mod tests;
