//! In-place cell editors.
//!
//! An editor is a plain value owned by the view while an edit is pending.
//! It consumes keys and answers with an [`EditorEvent`]; the view commits or
//! discards based on that answer, so no callback outlives the edit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::model::{CellValue, ValueKind};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;

/// What the view should do after an editor consumed a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Key handled (or ignored); the edit stays open.
    Continue,
    /// Write the value back, then move the current cell by `(dx, dy)`.
    Commit { advance: Option<(i32, i32)> },
    /// Close without writing.
    Cancel,
}

impl EditorEvent {
    pub const COMMIT: EditorEvent = EditorEvent::Commit { advance: None };
}

/// Multi-line text buffer with a byte-offset cursor on grapheme boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEditor {
    lines: Vec<String>,
    line: usize,
    offset: usize,
    /// Enter/Up/Left at the text edge leave the editor and move the grid cursor.
    grid_navigation: bool,
}

impl TextEditor {
    pub fn new(text: &str, grid_navigation: bool) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let line = lines.len() - 1;
        let offset = lines[line].len();
        Self {
            lines,
            line,
            offset,
            grid_navigation,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as `(display column, line)`.
    pub fn cursor(&self) -> (usize, usize) {
        let current = &self.lines[self.line];
        (current[..self.offset].width(), self.line)
    }

    fn current(&self) -> &str {
        &self.lines[self.line]
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.current()[..self.offset]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.current()[self.offset..]
            .graphemes(true)
            .next()
            .map(|g| self.offset + g.len())
    }

    /// Byte offset in `line` closest to display column `col`.
    fn offset_at(&self, line: usize, col: usize) -> usize {
        let mut width = 0;
        for (i, g) in self.lines[line].grapheme_indices(true) {
            if width >= col {
                return i;
            }
            width += g.width();
        }
        self.lines[line].len()
    }

    fn move_vertical(&mut self, down: bool) {
        let target = match down {
            true if self.line + 1 < self.lines.len() => self.line + 1,
            false if self.line > 0 => self.line - 1,
            _ => return,
        };
        let (col, _) = self.cursor();
        self.line = target;
        self.offset = self.offset_at(target, col);
    }

    fn insert_char(&mut self, ch: char) {
        let offset = self.offset;
        self.lines[self.line].insert(offset, ch);
        self.offset += ch.len_utf8();
    }

    fn insert_newline(&mut self) {
        let offset = self.offset;
        let tail = self.lines[self.line].split_off(offset);
        self.lines.insert(self.line + 1, tail);
        self.line += 1;
        self.offset = 0;
    }

    fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            let offset = self.offset;
            self.lines[self.line].replace_range(prev..offset, "");
            self.offset = prev;
        } else if self.line > 0 {
            let tail = self.lines.remove(self.line);
            self.line -= 1;
            self.offset = self.lines[self.line].len();
            self.lines[self.line].push_str(&tail);
        }
    }

    fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            let offset = self.offset;
            self.lines[self.line].replace_range(offset..next, "");
        } else if self.line + 1 < self.lines.len() {
            let tail = self.lines.remove(self.line + 1);
            self.lines[self.line].push_str(&tail);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorEvent {
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Esc => return EditorEvent::Cancel,
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => self.insert_newline(),
            KeyCode::Enter if self.grid_navigation => {
                return EditorEvent::Commit {
                    advance: Some((0, 1)),
                }
            }
            KeyCode::Enter => return EditorEvent::COMMIT,
            KeyCode::Up if self.grid_navigation && self.line == 0 => {
                return EditorEvent::Commit {
                    advance: Some((0, -1)),
                }
            }
            KeyCode::Left if self.grid_navigation && self.offset == 0 => {
                return EditorEvent::Commit {
                    advance: Some((-1, 0)),
                }
            }
            KeyCode::Up => self.move_vertical(false),
            KeyCode::Down => self.move_vertical(true),
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.offset = prev;
                } else if self.line > 0 {
                    self.line -= 1;
                    self.offset = self.current().len();
                }
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.offset = next;
                } else if self.line + 1 < self.lines.len() {
                    self.line += 1;
                    self.offset = 0;
                }
            }
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = self.current().len(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(ch) if plain => self.insert_char(ch),
            _ => {}
        }
        EditorEvent::Continue
    }
}

/// Numeric entry bounded to `[min, max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberEditor {
    buffer: String,
    initial: CellValue,
    min: i64,
    max: i64,
}

impl NumberEditor {
    pub fn new(value: &CellValue, min: i64, max: i64) -> Self {
        Self {
            buffer: value.to_string(),
            initial: value.clone(),
            min,
            max,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    fn parsed(&self) -> Option<f64> {
        self.buffer.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn keeps_integers(&self) -> bool {
        !matches!(self.initial, CellValue::Float(_)) && !self.buffer.contains('.')
    }

    /// Value to write back: clamped to the range, integral when the buffer
    /// holds an integer. Unparseable input falls back to the initial value.
    pub fn value(&self) -> CellValue {
        let Some(v) = self.parsed() else {
            return self.initial.clone();
        };
        let v = v.clamp(self.min as f64, self.max as f64);
        if self.keeps_integers() && v.fract() == 0.0 {
            CellValue::Int(v as i64)
        } else {
            CellValue::Float(v)
        }
    }

    fn step(&mut self, delta: f64) {
        let base = self.parsed().or_else(|| self.initial.as_f64()).unwrap_or(0.0);
        let v = (base + delta).clamp(self.min as f64, self.max as f64);
        self.buffer = if self.keeps_integers() && v.fract() == 0.0 {
            (v as i64).to_string()
        } else {
            v.to_string()
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorEvent {
        match key.code {
            KeyCode::Esc => return EditorEvent::Cancel,
            KeyCode::Enter => return EditorEvent::COMMIT,
            KeyCode::Up => self.step(1.0),
            KeyCode::Down => self.step(-1.0),
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Char(ch @ ('0'..='9' | '.')) => self.buffer.push(ch),
            KeyCode::Char('-') if self.buffer.is_empty() => self.buffer.push('-'),
            _ => {}
        }
        EditorEvent::Continue
    }
}

/// Editor chosen by the cell's value kind.
#[derive(Clone, Debug, PartialEq)]
pub enum CellEditor {
    Text(TextEditor),
    Number(NumberEditor),
    /// Edits the formatted display text of values without a dedicated editor.
    Formatted(TextEditor),
}

impl CellEditor {
    /// Picks the editor for `value`; `formatted` is the cell's display text.
    pub fn open(value: &CellValue, formatted: &str, min: i64, max: i64) -> Self {
        match value.kind() {
            ValueKind::Text => CellEditor::Text(TextEditor::new(&value.to_string(), true)),
            ValueKind::Number => CellEditor::Number(NumberEditor::new(value, min, max)),
            ValueKind::Other => CellEditor::Formatted(TextEditor::new(formatted, false)),
        }
    }

    /// Replaces the editor's content, keeping its kind.
    pub fn seed(&mut self, text: &str) {
        match self {
            CellEditor::Text(e) | CellEditor::Formatted(e) => {
                *e = TextEditor::new(text, e.grid_navigation);
            }
            CellEditor::Number(e) => e.buffer = text.to_string(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            CellEditor::Text(_) => ValueKind::Text,
            CellEditor::Number(_) => ValueKind::Number,
            CellEditor::Formatted(_) => ValueKind::Other,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorEvent {
        if key.kind == KeyEventKind::Release {
            return EditorEvent::Continue;
        }
        match self {
            CellEditor::Text(e) | CellEditor::Formatted(e) => e.handle_key(key),
            CellEditor::Number(e) => e.handle_key(key),
        }
    }

    pub fn value(&self) -> CellValue {
        match self {
            CellEditor::Text(e) | CellEditor::Formatted(e) => CellValue::Text(e.text()),
            CellEditor::Number(e) => e.value(),
        }
    }

    /// Editor area over a cell of `w x h`: numbers take a single line.
    pub fn size_over(&self, w: i32, h: i32) -> (i32, i32) {
        match self {
            CellEditor::Number(_) => (w, h.min(1)),
            _ => (w, h),
        }
    }

    /// Cursor as `(column, line)` relative to the editor's origin.
    pub fn cursor(&self) -> (usize, usize) {
        match self {
            CellEditor::Text(e) | CellEditor::Formatted(e) => e.cursor(),
            CellEditor::Number(e) => (e.text().width(), 0),
        }
    }

    /// Paints the editor into `area` and returns the cursor position if it
    /// falls inside.
    pub fn paint(&self, painter: &mut Painter, area: Rect, style: Style) -> Option<Pos> {
        if area.is_empty() {
            return None;
        }
        painter.fill_rect(area, style);
        match self {
            CellEditor::Text(e) | CellEditor::Formatted(e) => {
                for (i, line) in e.lines().iter().take(area.h as usize).enumerate() {
                    let pos = Pos::new(area.x, area.y + i as u16);
                    painter.text(pos, line.as_str(), style, area);
                }
            }
            CellEditor::Number(e) => {
                painter.text(Pos::new(area.x, area.y), e.text(), style, area);
            }
        }
        let (col, line) = self.cursor();
        let pos = Pos::new(
            area.x.saturating_add(col as u16),
            area.y.saturating_add(line as u16),
        );
        area.contains(pos).then_some(pos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/editor.rs"]
mod tests;
