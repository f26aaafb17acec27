//! Interactive table view.
//!
//! `TableView` owns everything about one grid except the data itself: the
//! coordinate model, selection, cursor and drag state, the pending edit and
//! the scroll position. Input handlers live in `mouse`, `keys` and `edit`;
//! drawing lives in `render`.

mod edit;
mod keys;
mod mouse;
mod render;

use std::ops::Range;

use tracing::{debug, warn};

use super::config::TableConfig;
use super::editor::CellEditor;
use super::error::{TableError, TableResult};
use super::hit_test::{self, GridPos, SeparatorHit};
use super::layout::{measure_column, measure_row, TableLayout};
use super::model::{Axis, DefaultTableModel, TableModel};
use super::selection::{SelectionMatrix, SelectionMode};

/// Rows sampled on each side of the viewport centre when fitting a column.
pub const FAST_CHECK_ROWS: usize = 100;
/// Columns sampled on each side of the viewport centre when fitting a row.
pub const FAST_CHECK_COLUMNS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Rectangle between two cells.
    Cells {
        anchor: (usize, usize),
        current: (usize, usize),
    },
    /// Whole rows or columns; `anchor` is a `RowHeader` or `ColumnHeader`.
    Headers {
        anchor: GridPos,
        current: (usize, usize),
    },
    /// A separator being dragged to resize.
    Separator(SeparatorHit),
}

/// The one open editor and the cell it writes back to.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit {
    pub row: usize,
    pub col: usize,
    pub editor: CellEditor,
}

pub struct TableView {
    model: Box<dyn TableModel>,
    config: TableConfig,
    layout: TableLayout,
    selection: SelectionMatrix,
    current: Option<(usize, usize)>,
    hover: Option<GridPos>,
    drag: DragState,
    pending: Option<PendingEdit>,
    offset: (i32, i32),
    viewport: (i32, i32),
    sort: Option<(usize, SortOrder)>,
    shape: (usize, usize),
}

impl TableView {
    /// A view over the placeholder model.
    pub fn new(config: TableConfig) -> Self {
        Self::with_model(Box::new(DefaultTableModel), config)
    }

    pub fn with_model(model: Box<dyn TableModel>, config: TableConfig) -> Self {
        let layout = TableLayout::new(model.as_ref(), &config);
        let shape = (model.row_count(), model.column_count());
        Self {
            model,
            config,
            layout,
            selection: SelectionMatrix::new(shape.0, shape.1),
            current: None,
            hover: None,
            drag: DragState::Idle,
            pending: None,
            offset: (0, 0),
            viewport: (0, 0),
            sort: None,
            shape,
        }
    }

    pub fn model(&self) -> &dyn TableModel {
        self.model.as_ref()
    }

    /// Mutable access to the data. Shape changes are picked up on the next
    /// event or paint.
    pub fn model_mut(&mut self) -> &mut dyn TableModel {
        self.model.as_mut()
    }

    /// Rebinds the data source; layout and selection start over.
    pub fn set_model(&mut self, model: Box<dyn TableModel>) {
        self.model = model;
        self.rebuild();
        debug!(rows = self.shape.0, cols = self.shape.1, "table model replaced");
    }

    fn rebuild(&mut self) {
        self.abort_interaction();
        self.shape = (self.model.row_count(), self.model.column_count());
        self.layout.recompute(self.model.as_ref());
        self.selection.resize(self.shape.0, self.shape.1);
        self.current = None;
        self.hover = None;
        self.clamp_offset();
    }

    /// Drops drag, hover and any open editor without committing.
    fn abort_interaction(&mut self) {
        self.drag = DragState::Idle;
        self.hover = None;
        if let Some(edit) = self.pending.take() {
            debug!(row = edit.row, col = edit.col, "editor closed without commit");
        }
    }

    /// Detects a model whose shape changed behind our back. Any interaction
    /// in flight refers to stale indices, so it is aborted.
    pub fn sync_shape(&mut self) -> bool {
        let shape = (self.model.row_count(), self.model.column_count());
        if shape == self.shape {
            return false;
        }
        let busy = self.drag != DragState::Idle || self.pending.is_some();
        if busy {
            warn!(
                old_rows = self.shape.0,
                old_cols = self.shape.1,
                rows = shape.0,
                cols = shape.1,
                "model shape changed mid-interaction; aborting"
            );
        }
        self.rebuild();
        true
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionMatrix {
        &self.selection
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.get(row, col)
    }

    pub fn current(&self) -> Option<(usize, usize)> {
        self.current
    }

    pub fn hover(&self) -> Option<GridPos> {
        self.hover
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn pending_edit(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn sort_indicator(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    /// Marks `col` as the sort column; only the header glyph changes.
    pub fn set_sort_indicator(&mut self, sort: Option<(usize, SortOrder)>) {
        self.sort = sort;
    }

    fn check_row(&self, row: usize) -> TableResult<()> {
        if row < self.shape.0 {
            return Ok(());
        }
        Err(TableError::RowOutOfRange {
            index: row,
            len: self.shape.0,
        })
    }

    fn check_col(&self, col: usize) -> TableResult<()> {
        if col < self.shape.1 {
            return Ok(());
        }
        Err(TableError::ColumnOutOfRange {
            index: col,
            len: self.shape.1,
        })
    }

    // ---------------------------------------------------------------------
    // Sizes
    // ---------------------------------------------------------------------

    pub fn column_width(&self, col: usize) -> Option<i32> {
        self.layout.cols().size(col)
    }

    pub fn row_height(&self, row: usize) -> Option<i32> {
        self.layout.rows().size(row)
    }

    pub fn set_column_width(&mut self, col: usize, width: usize) -> TableResult<()> {
        self.sync_shape();
        self.layout
            .axis_mut(Axis::Column)
            .set_size(col, width)
            .map_err(|e| {
                warn!(col, width, error = %e, "set_column_width rejected");
                e
            })?;
        self.clamp_offset();
        Ok(())
    }

    pub fn set_row_height(&mut self, row: usize, height: usize) -> TableResult<()> {
        self.sync_shape();
        self.layout
            .axis_mut(Axis::Row)
            .set_size(row, height)
            .map_err(|e| {
                warn!(row, height, error = %e, "set_row_height rejected");
                e
            })?;
        self.clamp_offset();
        Ok(())
    }

    /// Rows measured when fitting a column. With `fast_check` this is only
    /// a window around the row at the viewport centre, so a wider cell far
    /// away is missed.
    fn sample_rows(&self) -> Range<usize> {
        let rows = self.shape.0;
        if !self.config.fast_check {
            return 0..rows;
        }
        let (row, _) = self.centre_cell();
        row.saturating_sub(FAST_CHECK_ROWS)..(row + FAST_CHECK_ROWS).min(rows)
    }

    /// Columns measured when fitting a row; see [`Self::sample_rows`].
    fn sample_columns(&self) -> Range<usize> {
        let cols = self.shape.1;
        if !self.config.fast_check {
            return 0..cols;
        }
        let (_, col) = self.centre_cell();
        col.saturating_sub(FAST_CHECK_COLUMNS)..(col + FAST_CHECK_COLUMNS).min(cols)
    }

    fn centre_cell(&self) -> (usize, usize) {
        let (w, h) = self.viewport;
        hit_test::locate(&self.layout, self.offset, w / 2, h / 2, false)
            .and_then(|p| Some((p.row()?, p.col()?)))
            .unwrap_or((0, 0))
    }

    /// Natural width of a column over the sampled rows.
    pub fn column_contents_size(&self, col: usize) -> TableResult<usize> {
        self.check_col(col)?;
        Ok(measure_column(self.model.as_ref(), col, self.sample_rows()))
    }

    /// Natural height of a row over the sampled columns.
    pub fn row_contents_size(&self, row: usize) -> TableResult<usize> {
        self.check_row(row)?;
        Ok(measure_row(self.model.as_ref(), row, self.sample_columns()))
    }

    pub fn resize_column_to_contents(&mut self, col: usize) -> TableResult<()> {
        self.sync_shape();
        let width = self.column_contents_size(col)?;
        self.set_column_width(col, width)
    }

    pub fn resize_columns_to_contents(&mut self) -> TableResult<()> {
        self.sync_shape();
        let rows = self.sample_rows();
        let sizes: Vec<usize> = (0..self.shape.1)
            .map(|c| measure_column(self.model.as_ref(), c, rows.clone()))
            .collect();
        self.layout.axis_mut(Axis::Column).set_sizes(&sizes)?;
        self.clamp_offset();
        Ok(())
    }

    pub fn resize_row_to_contents(&mut self, row: usize) -> TableResult<()> {
        self.sync_shape();
        let height = self.row_contents_size(row)?;
        self.set_row_height(row, height)
    }

    pub fn resize_rows_to_contents(&mut self) -> TableResult<()> {
        self.sync_shape();
        let cols = self.sample_columns();
        let sizes: Vec<usize> = (0..self.shape.0)
            .map(|r| measure_row(self.model.as_ref(), r, cols.clone()))
            .collect();
        self.layout.axis_mut(Axis::Row).set_sizes(&sizes)?;
        self.clamp_offset();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Separators and headers
    // ---------------------------------------------------------------------

    pub fn separator_visible(&self, axis: Axis) -> bool {
        self.layout.separator_visible(axis)
    }

    pub fn set_separator_visible(&mut self, axis: Axis, visible: bool) {
        if let DragState::Separator(hit) = self.drag {
            if hit.axis == axis {
                self.drag = DragState::Idle;
            }
        }
        self.layout.set_separator_visible(axis, visible);
        self.clamp_offset();
    }

    pub fn header_visible(&self, axis: Axis) -> bool {
        self.layout.header_visible(axis)
    }

    pub fn set_header_visible(&mut self, axis: Axis, visible: bool) {
        self.layout.set_header_visible(axis, visible);
        self.clamp_offset();
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Selects the `size = (rows, cols)` rectangle whose top-left cell is
    /// `pos = (row, col)`.
    pub fn set_selection(
        &mut self,
        pos: (usize, usize),
        size: (usize, usize),
        mode: SelectionMode,
    ) -> TableResult<()> {
        self.sync_shape();
        let (row, col) = pos;
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(TableError::InvalidSize { size: rows.min(cols) });
        }
        let last_row = row.checked_add(rows - 1).ok_or(TableError::RowOutOfRange {
            index: row,
            len: self.shape.0,
        })?;
        let last_col = col.checked_add(cols - 1).ok_or(TableError::ColumnOutOfRange {
            index: col,
            len: self.shape.1,
        })?;
        self.check_row(last_row)?;
        self.check_col(last_col)?;
        self.selection.apply(row..row + rows, col..col + cols, mode);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ---------------------------------------------------------------------
    // Viewport and scrolling
    // ---------------------------------------------------------------------

    pub fn viewport(&self) -> (i32, i32) {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width as i32, height as i32);
        self.clamp_offset();
    }

    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_offset(&self) -> (i32, i32) {
        let (fw, fh) = self.layout.full_size();
        let (w, h) = self.viewport;
        ((fw - w).max(0), (fh - h).max(0))
    }

    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.offset = (x, y);
        self.clamp_offset();
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll_to(self.offset.0 + dx, self.offset.1 + dy);
    }

    fn clamp_offset(&mut self) {
        let (mx, my) = self.max_offset();
        self.offset = (self.offset.0.clamp(0, mx), self.offset.1.clamp(0, my));
    }

    /// Scrolls the least amount that brings the cell's content into view.
    pub fn ensure_visible(&mut self, row: usize, col: usize) {
        let body_w = self.viewport.0 - self.layout.header_x();
        let body_h = self.viewport.1 - self.layout.header_y();
        if let Some((xa, xb)) = self.layout.cols().extent(col) {
            self.offset.0 = scroll_into(self.offset.0, body_w, xa, xb);
        }
        if let Some((ya, yb)) = self.layout.rows().extent(row) {
            self.offset.1 = scroll_into(self.offset.1, body_h, ya, yb);
        }
        self.clamp_offset();
    }

    /// Pointer left the view.
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Focus moved elsewhere: commit any open editor and drop separator grabs.
    pub fn focus_lost(&mut self) {
        self.commit_pending();
        if matches!(self.drag, DragState::Separator(_)) {
            self.drag = DragState::Idle;
        }
        self.hover = None;
    }
}

/// New offset for a window `[offset, offset + len)` to contain `[start, end)`.
/// The start wins when the range is larger than the window.
fn scroll_into(offset: i32, len: i32, start: i32, end: i32) -> i32 {
    if len <= 0 {
        return offset;
    }
    if end > offset + len {
        (end - len).min(start)
    } else if start < offset {
        start
    } else {
        offset
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/table/view/mod.rs"]
mod tests;
