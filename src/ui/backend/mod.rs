//! Rendering backends.
//!
//! The table renders into a `Painter`; a backend replays the commands onto a
//! concrete surface so the engine never mentions `ratatui` types.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
