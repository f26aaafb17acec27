//! Per-cell selection state.

use std::ops::Range;

/// How a programmatic selection combines with what is already selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Select,
    Deselect,
    Toggle,
    /// Clear everything, then select.
    ClearAndSelect,
}

/// Row-major boolean grid with one entry per cell.
///
/// Shape changes never preserve content: [`SelectionMatrix::resize`] resets
/// every entry to unselected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl SelectionMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        *self = Self::new(rows, cols);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Out-of-shape cells read as unselected.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).map_or(false, |i| self.cells[i])
    }

    /// Returns whether the cell was inside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = !self.cells[i];
        }
    }

    pub fn clear(&mut self) {
        self.fill(false);
    }

    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    pub fn all(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|&c| c)
    }

    pub fn none(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Selects everything unless everything is already selected, in which
    /// case everything is cleared.
    pub fn toggle_all(&mut self) {
        let value = !self.all();
        self.fill(value);
    }

    pub fn row_all(&self, row: usize) -> bool {
        row < self.rows && (0..self.cols).all(|c| self.get(row, c))
    }

    pub fn col_all(&self, col: usize) -> bool {
        col < self.cols && (0..self.rows).all(|r| self.get(r, col))
    }

    pub fn set_row(&mut self, row: usize, value: bool) {
        self.paint(row..row + 1, 0..self.cols, value);
    }

    pub fn set_col(&mut self, col: usize, value: bool) {
        self.paint(0..self.rows, col..col + 1, value);
    }

    /// Writes `value` into every cell of the rectangle, clipped to the shape.
    pub fn paint(&mut self, rows: Range<usize>, cols: Range<usize>, value: bool) {
        let rows = rows.start.min(self.rows)..rows.end.min(self.rows);
        let cols = cols.start.min(self.cols)..cols.end.min(self.cols);
        if cols.is_empty() {
            return;
        }
        for r in rows {
            let base = r * self.cols;
            self.cells[base + cols.start..base + cols.end].fill(value);
        }
    }

    /// Applies a programmatic selection to a rectangle.
    pub fn apply(&mut self, rows: Range<usize>, cols: Range<usize>, mode: SelectionMode) {
        match mode {
            SelectionMode::Select => self.paint(rows, cols, true),
            SelectionMode::Deselect => self.paint(rows, cols, false),
            SelectionMode::ClearAndSelect => {
                self.clear();
                self.paint(rows, cols, true);
            }
            SelectionMode::Toggle => {
                for r in rows {
                    for c in cols.clone() {
                        self.toggle(r, c);
                    }
                }
            }
        }
    }

    /// Selected cells in row-major order.
    pub fn selected(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/selection.rs"]
mod tests;
