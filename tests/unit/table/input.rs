use super::*;
use std::time::Duration;

fn mouse(kind: MouseEventKind, x: u16, y: u16, modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers,
    }
}

#[test]
fn second_click_within_window_is_double() {
    let mut t = ClickTracker::new(300, 1);
    let now = Instant::now();
    assert_eq!(t.click(5, 5, now), 1);
    assert_eq!(t.click(6, 5, now + Duration::from_millis(100)), 2);
    // Third click starts over.
    assert_eq!(t.click(6, 5, now + Duration::from_millis(150)), 1);
}

#[test]
fn slow_or_distant_clicks_stay_single() {
    let mut t = ClickTracker::new(300, 1);
    let now = Instant::now();
    t.click(5, 5, now);
    assert_eq!(t.click(5, 5, now + Duration::from_millis(400)), 1);
    assert_eq!(t.click(9, 5, now + Duration::from_millis(450)), 1);
    // A quick click in place pairs with the distant one.
    assert_eq!(t.click(9, 5, now + Duration::from_millis(460)), 2);
}

#[test]
fn translate_makes_coordinates_local() {
    let area = Rect::new(10, 4, 20, 10);
    let mut t = ClickTracker::new(300, 1);
    let ev = mouse(
        MouseEventKind::Down(MouseButton::Left),
        12,
        7,
        KeyModifiers::CONTROL,
    );
    let got = translate(&ev, area, &mut t, Instant::now()).unwrap();
    assert_eq!(got, TableMouse::press(2, 3).with_ctrl(true));
}

#[test]
fn translate_drops_presses_outside_but_keeps_drags() {
    let area = Rect::new(10, 4, 20, 10);
    let mut t = ClickTracker::new(300, 1);
    let now = Instant::now();
    let press = mouse(MouseEventKind::Down(MouseButton::Left), 2, 2, KeyModifiers::NONE);
    assert_eq!(translate(&press, area, &mut t, now), None);

    let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 2, 2, KeyModifiers::NONE);
    assert_eq!(translate(&drag, area, &mut t, now), Some(TableMouse::drag(-8, -2)));

    let right = mouse(MouseEventKind::Down(MouseButton::Right), 12, 7, KeyModifiers::NONE);
    assert_eq!(translate(&right, area, &mut t, now), None);
}

#[test]
fn translate_reports_double_clicks() {
    let area = Rect::new(0, 0, 20, 10);
    let mut t = ClickTracker::new(300, 1);
    let now = Instant::now();
    let press = mouse(MouseEventKind::Down(MouseButton::Left), 3, 3, KeyModifiers::NONE);
    assert_eq!(
        translate(&press, area, &mut t, now).map(|m| m.kind),
        Some(TableMouseKind::Press)
    );
    assert_eq!(
        translate(&press, area, &mut t, now + Duration::from_millis(50)).map(|m| m.kind),
        Some(TableMouseKind::DoubleClick)
    );
}
