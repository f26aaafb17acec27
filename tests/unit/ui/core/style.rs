use super::*;

#[test]
fn mod_bit_ops_and_contains() {
    let m = Mod::BOLD | Mod::UNDERLINE | Mod::ITALIC;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::UNDERLINE));
    assert!(m.contains(Mod::ITALIC));
    assert!(!m.contains(Mod::REVERSE));
}

#[test]
fn style_builder_sets_fields() {
    let s = Style::default().fg(Color::Rgb(1, 2, 3)).bg(Color::Indexed(8));
    assert_eq!(s.fg, Some(Color::Rgb(1, 2, 3)));
    assert_eq!(s.bg, Some(Color::Indexed(8)));
}

#[test]
fn reset_background_counts_as_none() {
    assert_eq!(Style::default().background(), None);
    assert_eq!(Style::default().bg(Color::Reset).background(), None);
    assert_eq!(
        Style::default().bg(Color::Indexed(4)).background(),
        Some(Color::Indexed(4))
    );
}

#[test]
fn invert_swaps_fg_and_bg() {
    let s = Style::default()
        .fg(Color::Indexed(1))
        .bg(Color::Indexed(2))
        .add_mod(Mod::BOLD);
    let inv = s.invert();
    assert_eq!(inv.fg, Some(Color::Indexed(2)));
    assert_eq!(inv.bg, Some(Color::Indexed(1)));
    assert!(inv.mods.contains(Mod::BOLD));

    let bg_only = s.background_style().invert();
    assert_eq!(bg_only.fg, Some(Color::Indexed(2)));
    assert_eq!(bg_only.bg, None);
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#0088AA"), Some(Color::Rgb(0, 0x88, 0xAA)));
    assert_eq!(parse_color(" Yellow "), Some(Color::Indexed(3)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
    assert_eq!(parse_color("#12"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}
