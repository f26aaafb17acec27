use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{EventResult, TableView};

impl TableView {
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        self.sync_shape();
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        if self.editor_key(key).is_some() {
            return EventResult::Consumed;
        }
        if self.shape.0 == 0 || self.shape.1 == 0 {
            return EventResult::Ignored;
        }

        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Up if plain => self.move_current_cell(0, -1),
            KeyCode::Down if plain => self.move_current_cell(0, 1),
            KeyCode::Left if plain => self.move_current_cell(-1, 0),
            KeyCode::Right if plain => self.move_current_cell(1, 0),
            KeyCode::Enter if plain => {
                let (row, col) = self.current.unwrap_or((0, 0));
                self.current = Some((row, col));
                if self.edit_cell(row, col).is_err() {
                    return EventResult::Ignored;
                }
            }
            KeyCode::Char(ch) if plain && !ch.is_control() => {
                if self.start_typing(ch).is_err() {
                    return EventResult::Ignored;
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// Moves the current cell by `(dx, dy)` columns/rows, clamped to the
    /// grid; an unset current cell becomes `(0, 0)`. The new cell is
    /// scrolled into view.
    pub fn move_current_cell(&mut self, dx: i32, dy: i32) {
        let (rows, cols) = self.shape;
        if rows == 0 || cols == 0 {
            self.current = None;
            return;
        }
        let (row, col) = match self.current {
            Some((row, col)) => (
                (row as i64 + dy as i64).clamp(0, rows as i64 - 1) as usize,
                (col as i64 + dx as i64).clamp(0, cols as i64 - 1) as usize,
            ),
            None => (0, 0),
        };
        self.current = Some((row, col));
        self.ensure_visible(row, col);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/table/view/keys.rs"]
mod tests;
