use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use super::{PendingEdit, TableView};
use crate::table::editor::{CellEditor, EditorEvent};
use crate::table::error::TableResult;
use crate::table::hit_test;
use crate::table::model::CellValue;

impl TableView {
    /// Opens the editor for `(row, col)`, committing any editor already open.
    pub fn edit_cell(&mut self, row: usize, col: usize) -> TableResult<()> {
        self.sync_shape();
        self.check_row(row)?;
        self.check_col(col)?;
        self.commit_pending();

        let value = self.model.data(row, col);
        let formatted = self.model.formatted_text(row, col);
        let editor = CellEditor::open(
            &value,
            &formatted,
            self.config.number_min,
            self.config.number_max,
        );
        debug!(row, col, kind = ?editor.kind(), "editor opened");
        self.pending = Some(PendingEdit { row, col, editor });
        Ok(())
    }

    /// Types `ch` into the current cell: the character replaces the value
    /// and the editor opens on it.
    pub fn start_typing(&mut self, ch: char) -> TableResult<()> {
        self.sync_shape();
        let (row, col) = self.current.unwrap_or((0, 0));
        self.check_row(row)?;
        self.check_col(col)?;
        self.commit_pending();
        self.current = Some((row, col));
        match self
            .model
            .set_data(row, col, CellValue::Text(ch.to_string()))
        {
            Ok(()) => self.edit_cell(row, col),
            Err(e) => {
                debug!(row, col, error = %e, "typed value not accepted, seeding editor");
                self.edit_cell(row, col)?;
                if let Some(edit) = self.pending.as_mut() {
                    edit.editor.seed(&ch.to_string());
                }
                Ok(())
            }
        }
    }

    /// Routes a key to the open editor. Returns `None` when no editor is open.
    pub(super) fn editor_key(&mut self, key: KeyEvent) -> Option<EditorEvent> {
        let event = self.pending.as_mut()?.editor.handle_key(key);
        match event {
            EditorEvent::Continue => {}
            EditorEvent::Commit { advance } => {
                self.commit_pending();
                if let Some((dx, dy)) = advance {
                    self.move_current_cell(dx, dy);
                }
            }
            EditorEvent::Cancel => self.cancel_edit(),
        }
        Some(event)
    }

    /// Writes the open editor's value back. A rejected value is dropped and
    /// the model keeps its previous value.
    pub fn commit_pending(&mut self) {
        let Some(PendingEdit { row, col, editor }) = self.pending.take() else {
            return;
        };
        let value = editor.value();
        match self.model.set_data(row, col, value) {
            Ok(()) => debug!(row, col, "edit committed"),
            Err(e) => warn!(row, col, error = %e, "edit rejected"),
        }
        self.sync_shape();
    }

    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.pending.take() {
            debug!(row = edit.row, col = edit.col, "edit cancelled");
        }
    }

    /// Editor area `(x, y, w, h)` relative to the view, over the cell content.
    pub fn editor_rect(&self) -> Option<(i32, i32, i32, i32)> {
        let edit = self.pending.as_ref()?;
        let (x, y, w, h) = hit_test::cell_rect(&self.layout, self.offset, edit.row, edit.col)?;
        let (w, h) = edit.editor.size_over(w, h);
        Some((x, y, w, h))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/table/view/edit.rs"]
mod tests;
