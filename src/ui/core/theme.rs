use crate::ui::core::style::{Color, Mod, Style};

/// Semantic style tokens for the table renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Cell,
    AlternateRow,
    Line,
    Header,
    Hover,
    Current,
    Selected,
    Separator,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::Cell,
        Token::AlternateRow,
        Token::Line,
        Token::Header,
        Token::Hover,
        Token::Current,
        Token::Selected,
        Token::Separator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Token::Cell => "cell",
            Token::AlternateRow => "alternate_row",
            Token::Line => "line",
            Token::Header => "header",
            Token::Hover => "hover",
            Token::Current => "current",
            Token::Selected => "selected",
            Token::Separator => "separator",
        }
    }
}

/// Styles used for one paint of a table.
///
/// Passed into every paint call; the renderer never looks a theme up on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePalette {
    pub cell: Style,
    /// Odd rows use this instead of `cell` when set.
    pub alternate_row: Option<Style>,
    pub line: Style,
    pub header: Style,
    pub hover: Style,
    pub current: Style,
    pub selected: Style,
    pub separator: Style,
}

impl TablePalette {
    pub fn set_style(&mut self, token: Token, style: Style) {
        match token {
            Token::Cell => self.cell = style,
            Token::AlternateRow => self.alternate_row = Some(style),
            Token::Line => self.line = style,
            Token::Header => self.header = style,
            Token::Hover => self.hover = style,
            Token::Current => self.current = style,
            Token::Selected => self.selected = style,
            Token::Separator => self.separator = style,
        }
    }

    pub fn row_style(&self, row: usize) -> Style {
        match self.alternate_row {
            Some(alt) if row % 2 == 1 => alt,
            _ => self.cell,
        }
    }
}

impl Default for TablePalette {
    fn default() -> Self {
        let yellow = Color::Rgb(0xFF, 0xFF, 0x00);
        Self {
            cell: Style::default(),
            alternate_row: None,
            line: Style::default().fg(Color::Rgb(0x44, 0x44, 0x44)),
            header: Style::default()
                .fg(Color::Rgb(0xFF, 0xFF, 0xFF))
                .bg(Color::Rgb(0x44, 0x44, 0x44))
                .add_mod(Mod::BOLD),
            hover: Style::default()
                .fg(yellow)
                .bg(Color::Rgb(0x00, 0x88, 0xAA))
                .add_mod(Mod::BOLD),
            current: Style::default()
                .fg(yellow)
                .bg(Color::Rgb(0x00, 0x88, 0xFF))
                .add_mod(Mod::BOLD),
            selected: Style::default().bg(Color::Rgb(0x00, 0x66, 0xAA)),
            separator: Style::default()
                .fg(Color::Rgb(0x55, 0x55, 0x55))
                .bg(Color::Rgb(0x44, 0x44, 0x44)),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
