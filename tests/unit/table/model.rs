use super::*;

#[test]
fn value_kinds_map_to_editors() {
    assert_eq!(CellValue::from("a").kind(), ValueKind::Text);
    assert_eq!(CellValue::Int(3).kind(), ValueKind::Number);
    assert_eq!(CellValue::Float(0.5).kind(), ValueKind::Number);
    assert_eq!(CellValue::Bool(true).kind(), ValueKind::Other);
    assert_eq!(CellValue::Empty.kind(), ValueKind::Other);
}

#[test]
fn display_formats_values() {
    assert_eq!(CellValue::Int(-4).to_string(), "-4");
    assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
    assert_eq!(CellValue::Bool(false).to_string(), "false");
    assert_eq!(CellValue::Empty.to_string(), "");
}

#[test]
fn default_model_is_fifteen_by_ten_placeholder() {
    let m = DefaultTableModel;
    assert_eq!((m.row_count(), m.column_count()), (15, 10));
    assert_eq!(m.formatted_text(3, 7), "3x7");
    assert_eq!(m.header_label(4, Axis::Row), "4");
}

#[test]
fn default_model_is_read_only() {
    let mut m = DefaultTableModel;
    assert_eq!(m.set_data(0, 0, "x".into()), Err(TableError::ReadOnly));
}

#[test]
fn vec_model_reads_ragged_rows_as_empty() {
    let m = VecTableModel::new(vec![vec!["a".into()], vec!["b".into(), "c".into()]]);
    assert_eq!(m.column_count(), 2);
    assert_eq!(m.data(0, 1), CellValue::Empty);
    assert_eq!(m.data(1, 1), CellValue::from("c"));
}

#[test]
fn vec_model_labels_fall_back_to_index() {
    let m = VecTableModel::filled(2, 2, CellValue::Empty)
        .with_column_headers(["Name"])
        .with_row_headers(["first", "second"]);
    assert_eq!(m.header_label(0, Axis::Column), "Name");
    assert_eq!(m.header_label(1, Axis::Column), "1");
    assert_eq!(m.header_label(1, Axis::Row), "second");
}

#[test]
fn vec_model_set_data_validates() {
    let mut m = VecTableModel::filled(2, 2, CellValue::Int(0)).with_column_kind(1, ValueKind::Number);
    assert!(m.set_data(0, 1, CellValue::Int(7)).is_ok());
    assert_eq!(m.data(0, 1), CellValue::Int(7));

    assert!(matches!(
        m.set_data(0, 1, "seven".into()),
        Err(TableError::Rejected { row: 0, col: 1, .. })
    ));
    assert_eq!(m.data(0, 1), CellValue::Int(7));

    assert!(matches!(
        m.set_data(5, 0, CellValue::Int(1)),
        Err(TableError::RowOutOfRange { index: 5, len: 2 })
    ));
    assert!(matches!(
        m.set_data(0, 9, CellValue::Int(1)),
        Err(TableError::ColumnOutOfRange { index: 9, len: 2 })
    ));
}

#[test]
fn read_only_vec_model_rejects_writes() {
    let mut m = VecTableModel::filled(1, 1, CellValue::Empty).read_only(true);
    assert_eq!(m.set_data(0, 0, "x".into()), Err(TableError::ReadOnly));
}
