use tracing::debug;

use super::{DragState, EventResult, TableView};
use crate::table::hit_test::{self, GridPos};
use crate::table::input::{TableMouse, TableMouseKind};
use crate::table::model::Axis;

impl TableView {
    pub fn handle_mouse(&mut self, event: TableMouse) -> EventResult {
        self.sync_shape();
        let step = self.config.scroll_step as i32;
        match event.kind {
            TableMouseKind::Press => self.mouse_press(event),
            TableMouseKind::DoubleClick => self.mouse_double_click(event),
            TableMouseKind::Drag => self.mouse_drag(event),
            TableMouseKind::Release => self.mouse_release(event),
            TableMouseKind::Move => self.mouse_move(event),
            TableMouseKind::ScrollUp => self.wheel(0, -step),
            TableMouseKind::ScrollDown => self.wheel(0, step),
            TableMouseKind::ScrollLeft => self.wheel(-step, 0),
            TableMouseKind::ScrollRight => self.wheel(step, 0),
        }
    }

    fn wheel(&mut self, dx: i32, dy: i32) -> EventResult {
        let before = self.offset;
        self.scroll_by(dx, dy);
        if self.offset == before {
            return EventResult::Ignored;
        }
        EventResult::Consumed
    }

    fn mouse_move(&mut self, event: TableMouse) -> EventResult {
        let hover = match hit_test::separator_at(&self.layout, self.offset, event.x, event.y) {
            Some(_) => None,
            None => hit_test::locate(&self.layout, self.offset, event.x, event.y, true),
        };
        if hover == self.hover {
            return EventResult::Ignored;
        }
        self.hover = hover;
        EventResult::Consumed
    }

    fn mouse_press(&mut self, event: TableMouse) -> EventResult {
        self.commit_pending();
        self.drag = DragState::Idle;

        if let Some(hit) = hit_test::separator_at(&self.layout, self.offset, event.x, event.y) {
            debug!(axis = ?hit.axis, index = hit.index, "separator drag start");
            self.drag = DragState::Separator(hit);
            return EventResult::Consumed;
        }

        let Some(pos) = hit_test::locate(&self.layout, self.offset, event.x, event.y, true) else {
            return EventResult::Ignored;
        };
        match pos {
            GridPos::Corner => self.selection.toggle_all(),
            GridPos::RowHeader(row) => {
                let value = !self.selection.row_all(row);
                if !event.ctrl {
                    self.selection.clear();
                }
                self.selection.set_row(row, value);
                self.drag = DragState::Headers {
                    anchor: pos,
                    current: (row, 0),
                };
            }
            GridPos::ColumnHeader(col) => {
                let value = !self.selection.col_all(col);
                if !event.ctrl {
                    self.selection.clear();
                }
                self.selection.set_col(col, value);
                self.drag = DragState::Headers {
                    anchor: pos,
                    current: (0, col),
                };
            }
            GridPos::Cell { row, col } => {
                self.current = Some((row, col));
                if event.ctrl {
                    self.selection.toggle(row, col);
                } else {
                    self.selection.set(row, col, true);
                }
                self.drag = DragState::Cells {
                    anchor: (row, col),
                    current: (row, col),
                };
            }
        }
        self.hover = None;
        EventResult::Consumed
    }

    fn mouse_drag(&mut self, event: TableMouse) -> EventResult {
        match self.drag {
            DragState::Idle => EventResult::Ignored,
            DragState::Separator(hit) => {
                let (min_span, coord) = match hit.axis {
                    Axis::Column => (
                        self.config.min_column_span,
                        event.x + self.offset.0 - self.layout.header_x(),
                    ),
                    Axis::Row => (
                        self.config.min_row_span,
                        event.y + self.offset.1 - self.layout.header_y(),
                    ),
                };
                if self
                    .layout
                    .axis_mut(hit.axis)
                    .drag_separator(hit.index, coord, min_span)
                    .is_err()
                {
                    self.drag = DragState::Idle;
                    return EventResult::Ignored;
                }
                self.clamp_offset();
                EventResult::Consumed
            }
            DragState::Cells { ref mut current, .. } | DragState::Headers { ref mut current, .. } => {
                let Some(GridPos::Cell { row, col }) =
                    hit_test::locate(&self.layout, self.offset, event.x, event.y, false)
                else {
                    return EventResult::Ignored;
                };
                *current = (row, col);
                EventResult::Consumed
            }
        }
    }

    fn mouse_release(&mut self, event: TableMouse) -> EventResult {
        let drag = std::mem::take(&mut self.drag);
        self.hover = None;
        let (rows, cols) = self.shape;
        let (anchor_cell, row_range, col_range) = match drag {
            DragState::Cells { anchor, current } => (
                anchor,
                anchor.0.min(current.0)..anchor.0.max(current.0) + 1,
                anchor.1.min(current.1)..anchor.1.max(current.1) + 1,
            ),
            DragState::Headers {
                anchor: GridPos::RowHeader(row),
                current,
            } => ((row, 0), row.min(current.0)..row.max(current.0) + 1, 0..cols),
            DragState::Headers {
                anchor: GridPos::ColumnHeader(col),
                current,
            } => ((0, col), 0..rows, col.min(current.1)..col.max(current.1) + 1),
            DragState::Headers { .. } | DragState::Separator(_) | DragState::Idle => {
                return EventResult::Consumed;
            }
        };

        let value = if event.ctrl {
            self.selection.get(anchor_cell.0, anchor_cell.1)
        } else {
            self.selection.clear();
            true
        };
        debug!(
            rows = ?row_range,
            cols = ?col_range,
            value,
            "selection drag committed"
        );
        self.selection.paint(row_range, col_range, value);
        EventResult::Consumed
    }

    fn mouse_double_click(&mut self, event: TableMouse) -> EventResult {
        self.commit_pending();
        self.drag = DragState::Idle;

        if let Some(hit) = hit_test::separator_at(&self.layout, self.offset, event.x, event.y) {
            let resized = match hit.axis {
                Axis::Column => self.resize_column_to_contents(hit.index),
                Axis::Row => self.resize_row_to_contents(hit.index),
            };
            return match resized {
                Ok(()) => EventResult::Consumed,
                Err(_) => EventResult::Ignored,
            };
        }

        let Some(GridPos::Cell { row, col }) =
            hit_test::locate(&self.layout, self.offset, event.x, event.y, false)
        else {
            return EventResult::Ignored;
        };
        self.current = Some((row, col));
        match self.edit_cell(row, col) {
            Ok(()) => EventResult::Consumed,
            Err(_) => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/table/view/mouse.rs"]
mod tests;
