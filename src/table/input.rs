//! Pointer input in table-local coordinates.
//!
//! Terminal mouse events arrive in screen cells; the view works in signed
//! coordinates relative to its own area so drags may leave it.

use std::time::Instant;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::core::geom::{Pos, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableMouseKind {
    Press,
    DoubleClick,
    Drag,
    Release,
    Move,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableMouse {
    pub kind: TableMouseKind,
    pub x: i32,
    pub y: i32,
    /// Extend modifier: keep the existing selection and toggle.
    pub ctrl: bool,
}

impl TableMouse {
    pub fn new(kind: TableMouseKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            ctrl: false,
        }
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn press(x: i32, y: i32) -> Self {
        Self::new(TableMouseKind::Press, x, y)
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self::new(TableMouseKind::Drag, x, y)
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::new(TableMouseKind::Release, x, y)
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(TableMouseKind::Move, x, y)
    }

    pub fn double_click(x: i32, y: i32) -> Self {
        Self::new(TableMouseKind::DoubleClick, x, y)
    }
}

/// Double-click detection by position and time.
#[derive(Debug)]
pub struct ClickTracker {
    last_click: Option<(u16, u16, Instant)>,
    click_count: u8,
    double_click_ms: u64,
    slop: u16,
}

impl ClickTracker {
    pub fn new(double_click_ms: u64, slop: u16) -> Self {
        Self {
            last_click: None,
            click_count: 0,
            double_click_ms,
            slop,
        }
    }

    /// Registers a press and returns the click count: 1 or 2. A third
    /// press in a row starts over at 1.
    pub fn click(&mut self, x: u16, y: u16, now: Instant) -> u8 {
        self.click_count = match self.last_click {
            Some((lx, ly, lt))
                if self.click_count == 1
                    && x.abs_diff(lx) <= self.slop
                    && y.abs_diff(ly) <= self.slop
                    && (now.duration_since(lt).as_millis() as u64) < self.double_click_ms =>
            {
                2
            }
            _ => 1,
        };
        self.last_click = Some((x, y, now));
        self.click_count
    }
}

/// Translates a terminal mouse event into table-local input.
///
/// Presses, moves and wheel events outside `area` are dropped; drags and
/// releases always pass so an interaction started inside can finish outside.
/// Only the left button selects.
pub fn translate(
    event: &MouseEvent,
    area: Rect,
    tracker: &mut ClickTracker,
    now: Instant,
) -> Option<TableMouse> {
    let inside = area.contains(Pos::new(event.column, event.row));
    let kind = match event.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            match tracker.click(event.column, event.row, now) {
                2 => TableMouseKind::DoubleClick,
                _ => TableMouseKind::Press,
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => TableMouseKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => TableMouseKind::Release,
        MouseEventKind::Moved if inside => TableMouseKind::Move,
        MouseEventKind::ScrollUp if inside => TableMouseKind::ScrollUp,
        MouseEventKind::ScrollDown if inside => TableMouseKind::ScrollDown,
        MouseEventKind::ScrollLeft if inside => TableMouseKind::ScrollLeft,
        MouseEventKind::ScrollRight if inside => TableMouseKind::ScrollRight,
        _ => return None,
    };
    Some(TableMouse {
        kind,
        x: event.column as i32 - area.x as i32,
        y: event.row as i32 - area.y as i32,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/table/input.rs"]
mod tests;
