use super::*;
use crate::tokens::set::ThemeMode;

#[test]
fn tint_appends_alpha_to_hex_only() {
    assert_eq!(tint("#3B82F6", 0x1A), "#3B82F61A");
    assert_eq!(tint("#fff", 0x80), "#FFFFFF80");
    assert_eq!(tint("rgb(0,0,0)", 0x1A), "rgb(0,0,0)");
}

#[test]
fn heading_and_text_sizes_map_to_type_scale() {
    assert_eq!(heading_typo(Some(HeadingSize::Display)), TypoKey::Display);
    assert_eq!(heading_typo(Some(HeadingSize::Xl)), TypoKey::H1);
    assert_eq!(heading_typo(None), TypoKey::H3);
    assert_eq!(text_typo(Some(Size3::Lg), None), TypoKey::BodyLg);
    assert_eq!(
        text_typo(Some(Size3::Lg), Some(TextVariant::Caption)),
        TypoKey::Caption
    );
}

#[test]
fn button_table_covers_every_variant() {
    let t = TokenSet::defaults(ThemeMode::Light);
    let (bg, fg, border) = button_colors(&t, Some(ButtonVariant::Outline));
    assert_eq!(bg, "transparent");
    assert_eq!(fg, "#3B82F6");
    assert_eq!(border.unwrap().to_css(), "1.5px solid #3B82F6");
    let (bg, _, border) = button_colors(&t, Some(ButtonVariant::Danger));
    assert_eq!(bg, "#EF4444");
    assert!(border.is_none());
    let (_, _, h) = button_metrics(&t, Some(Size3::Lg));
    assert_eq!(h, 48.0);
}

#[test]
fn containers_have_flow_and_leaves_do_not() {
    let t = TokenSet::defaults(ThemeMode::Light);
    let (display, padding) = container_flow(&t, &ComponentKind::Card).unwrap();
    assert_eq!(display.gap(), 12.0);
    assert_eq!(padding, Edges::all(24.0));
    assert!(container_flow(&t, &ComponentKind::Nav).unwrap().0.is_row());
    assert!(container_flow(&t, &ComponentKind::Button).is_none());
}
