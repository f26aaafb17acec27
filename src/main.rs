//! gridtk demo: an editable table over generated sample data.
//!
//! Usage: `gridtk [config.json]`. Esc or Ctrl-C quits when no cell is being
//! edited. Logs go to `$GRIDTK_LOG_DIR` (or the temp dir); the latest info line
//! is shown in the status bar.

mod logging;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use gridtk::table::input::{self, ClickTracker};
use gridtk::table::{CellValue, SortOrder, TableConfig, TableView, ValueKind, VecTableModel};
use gridtk::ui::backend::terminal::RatatuiTerminal;
use gridtk::ui::core::geom::{Pos, Rect};
use gridtk::ui::core::painter::Painter;

const DEFAULT_CONFIG: &str = "gridtk.json";
const SAMPLE_ROWS: usize = 200;

fn sample_model() -> VecTableModel {
    let kinds = ["file", "dir", "link"];
    let rows = (0..SAMPLE_ROWS)
        .map(|i| {
            let notes = if i % 7 == 0 {
                format!("checked\nby #{}", i / 7)
            } else {
                String::new()
            };
            vec![
                CellValue::from(format!("item-{i:03}")),
                CellValue::Int((i as i64 * 37) % 1000),
                CellValue::from(kinds[i % kinds.len()]),
                CellValue::Bool(i % 3 == 0),
                CellValue::from(notes),
            ]
        })
        .collect();
    VecTableModel::new(rows)
        .with_column_headers(["Name", "Size", "Kind", "Flag", "Notes"])
        .with_column_kind(1, ValueKind::Number)
}

/// Table area and the one-line status bar under it.
fn split_status(area: Rect) -> (Rect, Rect) {
    if area.h < 2 {
        return (area, Rect::default());
    }
    let table = Rect::new(area.x, area.y, area.w, area.h - 1);
    let bar = Rect::new(area.x, area.bottom() - 1, area.w, 1);
    (table, bar)
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => key.modifiers.is_empty(),
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn main() -> io::Result<()> {
    let log_guard = logging::init();
    let status_line = log_guard.as_ref().map(logging::LoggingGuard::status_line);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = TableConfig::load(&config_path).map_err(io::Error::other)?;
    let palette = config.palette().map_err(io::Error::other)?;
    let mut tracker = ClickTracker::new(config.double_click_ms, config.click_slop);

    let mut view = TableView::with_model(Box::new(sample_model()), config);
    view.set_sort_indicator(Some((0, SortOrder::Ascending)));
    if let Err(e) = view.resize_columns_to_contents() {
        tracing::warn!(error = %e, "initial column fit failed");
    }
    tracing::info!(config = %config_path.display(), rows = SAMPLE_ROWS, "gridtk demo started");

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut status = String::new();
    let mut table_area = Rect::default();

    loop {
        if let Some(line) = status_line.as_ref().and_then(logging::StatusLine::take) {
            status = line;
        }

        terminal.draw(|backend, area| {
            let (table, bar) = split_status(area);
            table_area = table;
            let mut painter = Painter::new();
            let cursor = view.paint(&mut painter, table, &palette);
            painter.fill_rect(bar, palette.header);
            painter.text(Pos::new(bar.x, bar.y), status.as_str(), palette.header, bar);
            backend.draw(area, painter.cmds());
            backend.set_cursor(cursor);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if !view.is_editing() && is_quit(&key) {
                    break;
                }
                view.handle_key(key);
            }
            Event::Mouse(mouse) => {
                match input::translate(&mouse, table_area, &mut tracker, Instant::now()) {
                    Some(ev) => {
                        view.handle_mouse(ev);
                    }
                    None if mouse.kind == MouseEventKind::Moved => view.leave(),
                    None => {}
                }
            }
            Event::FocusLost => view.focus_lost(),
            _ => {}
        }
    }

    drop(terminal);
    if let Some(guard) = &log_guard {
        println!("logs: {}", guard.log_dir().display());
    }
    Ok(())
}
