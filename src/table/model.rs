//! Data source contract consumed by the table view.
//!
//! The view only reads shape, values and labels through [`TableModel`] and
//! writes back through [`TableModel::set_data`]; it never caches values.

use std::collections::HashMap;
use std::fmt;

use super::error::{TableError, TableResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Which editor a value gets; adding a kind means extending this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Number,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            CellValue::Text(_) => ValueKind::Text,
            CellValue::Int(_) | CellValue::Float(_) => ValueKind::Number,
            CellValue::Empty | CellValue::Bool(_) => ValueKind::Other,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn data(&self, row: usize, col: usize) -> CellValue;

    fn set_data(&mut self, _row: usize, _col: usize, _value: CellValue) -> TableResult<()> {
        Err(TableError::ReadOnly)
    }

    fn header_label(&self, index: usize, _axis: Axis) -> String {
        index.to_string()
    }

    /// Display text of a cell; may contain `\n` for multi-line cells.
    fn formatted_text(&self, row: usize, col: usize) -> String {
        self.data(row, col).to_string()
    }
}

/// Placeholder bound when no model is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTableModel;

impl TableModel for DefaultTableModel {
    fn row_count(&self) -> usize {
        15
    }

    fn column_count(&self) -> usize {
        10
    }

    fn data(&self, row: usize, col: usize) -> CellValue {
        CellValue::Text(format!("{row}x{col}"))
    }
}

/// In-memory row-major model.
#[derive(Debug, Clone, Default)]
pub struct VecTableModel {
    rows: Vec<Vec<CellValue>>,
    columns: usize,
    column_headers: Vec<String>,
    row_headers: Vec<String>,
    column_kinds: HashMap<usize, ValueKind>,
    read_only: bool,
}

impl VecTableModel {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn filled(rows: usize, columns: usize, value: CellValue) -> Self {
        Self::new(vec![vec![value; columns]; rows])
    }

    pub fn with_column_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_row_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts a column to values of one kind; `set_data` rejects others.
    pub fn with_column_kind(mut self, col: usize, kind: ValueKind) -> Self {
        self.column_kinds.insert(col, kind);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.columns = self.columns.max(row.len());
        self.rows.push(row);
    }

    pub fn truncate_rows(&mut self, len: usize) {
        self.rows.truncate(len);
    }
}

impl TableModel for VecTableModel {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn data(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn set_data(&mut self, row: usize, col: usize, value: CellValue) -> TableResult<()> {
        if self.read_only {
            return Err(TableError::ReadOnly);
        }
        if col >= self.columns {
            return Err(TableError::ColumnOutOfRange {
                index: col,
                len: self.columns,
            });
        }
        if let Some(kind) = self.column_kinds.get(&col) {
            if *kind != value.kind() {
                return Err(TableError::Rejected {
                    row,
                    col,
                    reason: format!("expected {kind:?} value"),
                });
            }
        }
        let len = self.rows.len();
        let line = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { index: row, len })?;
        if line.len() <= col {
            line.resize(col + 1, CellValue::Empty);
        }
        line[col] = value;
        Ok(())
    }

    fn header_label(&self, index: usize, axis: Axis) -> String {
        let labels = match axis {
            Axis::Row => &self.row_headers,
            Axis::Column => &self.column_headers,
        };
        labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/model.rs"]
mod tests;
