use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn intersect_of_disjoint_rects_is_empty() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(10, 10, 2, 2);
    assert!(a.intersect(b).is_empty());
    assert_eq!(a.intersect(Rect::new(2, 1, 10, 10)), Rect::new(2, 1, 2, 3));
}

#[test]
fn clip_signed_drops_negative_part() {
    let bounds = Rect::new(0, 0, 20, 10);
    assert_eq!(
        Rect::clip_signed(-3, -1, 5, 3, bounds),
        Some(Rect::new(0, 0, 2, 2))
    );
    assert_eq!(
        Rect::clip_signed(18, 9, 5, 5, bounds),
        Some(Rect::new(18, 9, 2, 1))
    );
}

#[test]
fn clip_signed_rejects_degenerate_and_outside() {
    let bounds = Rect::new(2, 2, 5, 5);
    assert_eq!(Rect::clip_signed(0, 0, 0, 4, bounds), None);
    assert_eq!(Rect::clip_signed(0, 0, 2, 2, bounds), None);
    assert_eq!(Rect::clip_signed(7, 3, 1, 1, bounds), None);
}
