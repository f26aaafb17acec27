//! Table configuration.
//!
//! Every field has a default so a partial JSON file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{TableError, TableResult};
use crate::ui::core::style::{parse_color, Mod, Style};
use crate::ui::core::theme::{TablePalette, Token};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Lines between rows.
    pub show_row_separators: bool,
    /// Lines between columns.
    pub show_column_separators: bool,
    pub show_row_header: bool,
    pub show_column_header: bool,
    /// Measure only a window around the viewport centre when fitting to contents.
    pub fast_check: bool,
    pub default_column_width: usize,
    pub default_row_height: usize,
    /// Minimum column span (content plus separator) while dragging a separator.
    pub min_column_span: usize,
    pub min_row_span: usize,
    pub number_min: i64,
    pub number_max: i64,
    pub double_click_ms: u64,
    pub click_slop: u16,
    pub scroll_step: usize,
    pub palette: PaletteSettings,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show_row_separators: true,
            show_column_separators: true,
            show_row_header: true,
            show_column_header: true,
            fast_check: true,
            default_column_width: 10,
            default_row_height: 1,
            min_column_span: 4,
            min_row_span: 2,
            number_min: -1_000_000,
            number_max: 1_000_000,
            double_click_ms: 300,
            click_slop: 1,
            scroll_step: 1,
            palette: PaletteSettings::default(),
        }
    }
}

impl TableConfig {
    /// Loads a JSON config. A missing file yields the defaults.
    pub fn load(path: &Path) -> TableResult<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(TableError::Config(format!("{}: {e}", path.display()))),
        };
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| TableError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TableResult<()> {
        if self.default_column_width == 0 || self.default_row_height == 0 {
            return Err(TableError::Config(
                "default cell sizes must be at least 1".to_string(),
            ));
        }
        if self.min_column_span == 0 || self.min_row_span == 0 {
            return Err(TableError::Config(
                "minimum spans must be at least 1".to_string(),
            ));
        }
        if self.number_min > self.number_max {
            return Err(TableError::Config(format!(
                "number_min {} exceeds number_max {}",
                self.number_min, self.number_max
            )));
        }
        Ok(())
    }

    /// Resolves the palette overrides on top of [`TablePalette::default`].
    pub fn palette(&self) -> TableResult<TablePalette> {
        let mut palette = TablePalette::default();
        for token in Token::ALL {
            let Some(settings) = self.palette.get(token) else {
                continue;
            };
            palette.set_style(token, settings.to_style(token)?);
        }
        Ok(palette)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

impl StyleSettings {
    fn to_style(&self, token: Token) -> TableResult<Style> {
        let mut style = Style::default();
        if let Some(fg) = self.fg.as_deref() {
            style = style.fg(resolve(token, fg)?);
        }
        if let Some(bg) = self.bg.as_deref() {
            style = style.bg(resolve(token, bg)?);
        }
        if self.bold {
            style = style.add_mod(Mod::BOLD);
        }
        Ok(style)
    }
}

fn resolve(token: Token, value: &str) -> TableResult<crate::ui::core::style::Color> {
    parse_color(value)
        .ok_or_else(|| TableError::Config(format!("{}: unknown color {value:?}", token.name())))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_row: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<StyleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<StyleSettings>,
}

impl PaletteSettings {
    fn get(&self, token: Token) -> Option<&StyleSettings> {
        match token {
            Token::Cell => self.cell.as_ref(),
            Token::AlternateRow => self.alternate_row.as_ref(),
            Token::Line => self.line.as_ref(),
            Token::Header => self.header.as_ref(),
            Token::Hover => self.hover.as_ref(),
            Token::Current => self.current.as_ref(),
            Token::Selected => self.selected.as_ref(),
            Token::Separator => self.separator.as_ref(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/config.rs"]
mod tests;
