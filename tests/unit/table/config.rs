use super::*;
use crate::ui::core::style::Color;
use std::io::Write;

#[test]
fn defaults_match_widget_conventions() {
    let config = TableConfig::default();
    assert!(config.show_row_separators);
    assert!(config.show_column_separators);
    assert!(config.fast_check);
    assert_eq!(config.default_column_width, 10);
    assert_eq!(config.min_column_span, 4);
    assert_eq!((config.number_min, config.number_max), (-1_000_000, 1_000_000));
    assert!(config.validate().is_ok());
}

#[test]
fn load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TableConfig::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, TableConfig::default());
}

#[test]
fn load_partial_file_overrides_named_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{ "show_row_separators": false, "default_column_width": 6,
              "palette": {{ "selected": {{ "bg": "#102030" }} }} }}"##
    )
    .unwrap();

    let config = TableConfig::load(file.path()).unwrap();
    assert!(!config.show_row_separators);
    assert!(config.show_column_separators);
    assert_eq!(config.default_column_width, 6);

    let palette = config.palette().unwrap();
    assert_eq!(palette.selected.bg, Some(Color::Rgb(0x10, 0x20, 0x30)));
    assert_eq!(palette.line, TablePalette::default().line);
}

#[test]
fn load_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        TableConfig::load(file.path()),
        Err(TableError::Config(_))
    ));
}

#[test]
fn validate_rejects_zero_sizes_and_inverted_range() {
    let config = TableConfig {
        default_column_width: 0,
        ..TableConfig::default()
    };
    assert!(config.validate().is_err());

    let config = TableConfig {
        number_min: 5,
        number_max: 1,
        ..TableConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn unknown_palette_color_is_reported_with_token_name() {
    let mut config = TableConfig::default();
    config.palette.hover = Some(StyleSettings {
        fg: Some("not-a-color".to_string()),
        bg: None,
        bold: true,
    });
    let err = config.palette().unwrap_err();
    assert!(err.to_string().contains("hover"));
}

#[test]
fn alternate_row_override_applies_to_odd_rows() {
    let mut config = TableConfig::default();
    config.palette.alternate_row = Some(StyleSettings {
        fg: None,
        bg: Some("dark_gray".to_string()),
        bold: false,
    });
    let palette = config.palette().unwrap();
    assert_eq!(palette.row_style(0), palette.cell);
    assert_eq!(palette.row_style(1).bg, Some(Color::Indexed(8)));
}
