use super::*;

fn rows_of(m: &SelectionMatrix) -> Vec<Vec<bool>> {
    let (rows, cols) = m.shape();
    (0..rows)
        .map(|r| (0..cols).map(|c| m.get(r, c)).collect())
        .collect()
}

#[test]
fn new_matrix_is_unselected() {
    let m = SelectionMatrix::new(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.none());
    assert!(!m.all());
}

#[test]
fn out_of_shape_access_is_ignored() {
    let mut m = SelectionMatrix::new(2, 2);
    assert!(!m.set(2, 0, true));
    assert!(!m.set(0, 2, true));
    m.toggle(5, 5);
    assert!(!m.get(9, 9));
    assert!(m.none());
}

#[test]
fn toggle_all_follows_toggle_law() {
    let mut m = SelectionMatrix::new(3, 3);
    m.set(1, 1, true);
    m.toggle_all();
    assert!(m.all());
    m.toggle_all();
    assert!(m.none());
}

#[test]
fn empty_matrix_is_never_all_selected() {
    let mut m = SelectionMatrix::new(0, 4);
    assert!(!m.all());
    m.toggle_all();
    assert!(m.is_empty());
}

#[test]
fn row_and_column_predicates() {
    let mut m = SelectionMatrix::new(3, 2);
    m.set_row(1, true);
    assert!(m.row_all(1));
    assert!(!m.row_all(0));
    assert!(!m.col_all(0));
    m.set_col(0, true);
    assert!(m.col_all(0));
    assert!(!m.row_all(3));
    assert_eq!(m.count(), 4);
}

#[test]
fn paint_clips_to_shape() {
    let mut m = SelectionMatrix::new(3, 3);
    m.paint(1..10, 2..10, true);
    assert_eq!(
        rows_of(&m),
        vec![
            vec![false, false, false],
            vec![false, false, true],
            vec![false, false, true],
        ]
    );
}

#[test]
fn resize_resets_content() {
    let mut m = SelectionMatrix::new(2, 2);
    m.fill(true);
    m.resize(3, 1);
    assert_eq!(m.shape(), (3, 1));
    assert!(m.none());
}

#[test]
fn apply_modes() {
    let mut m = SelectionMatrix::new(2, 2);
    m.apply(0..1, 0..2, SelectionMode::Select);
    assert_eq!(m.count(), 2);
    m.apply(0..2, 0..1, SelectionMode::Toggle);
    assert_eq!(rows_of(&m), vec![vec![false, true], vec![true, false]]);
    m.apply(1..2, 1..2, SelectionMode::ClearAndSelect);
    assert_eq!(m.selected().collect::<Vec<_>>(), vec![(1, 1)]);
    m.apply(0..2, 0..2, SelectionMode::Deselect);
    assert!(m.none());
}
