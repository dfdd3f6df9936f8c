use super::*;
use serde_json::json;

fn ds(v: serde_json::Value) -> DesignSystem {
    serde_json::from_value(v).unwrap()
}

#[test]
fn defaults_carry_every_required_color() {
    let t = TokenSet::defaults(ThemeMode::Light);
    for key in defaults::REQUIRED_COLOR_KEYS {
        assert!(t.colors.contains_key(key), "missing {key}");
    }
    let t = TokenSet::defaults(ThemeMode::Dark);
    for key in defaults::REQUIRED_COLOR_KEYS {
        assert!(t.colors.contains_key(key), "missing dark {key}");
    }
}

#[test]
fn partial_overrides_never_drop_default_keys() {
    let user = ds(json!({
        "colorPalette": { "primary": "#112233", "brand": "#445566" },
        "typography": { "scale": { "h1": { "size": "40px" } } },
        "spacing": { "scale": { "4": 20 }, "borderRadius": { "md": "0.5rem" } },
        "shadows": { "glow": { "x": 0, "y": 0, "blur": 12, "color": "#3B82F680" } }
    }));
    let t = resolve_tokens(Some(&user), ThemeMode::Light);
    let d = TokenSet::defaults(ThemeMode::Light);

    for k in d.colors.keys() {
        assert!(t.colors.contains_key(k));
    }
    for k in d.typography.keys() {
        assert!(t.typography.contains_key(k));
    }
    for k in d.spacing.keys() {
        assert!(t.spacing.contains_key(k));
    }
    for k in d.radii.keys() {
        assert!(t.radii.contains_key(k));
    }
    for k in d.shadows.keys() {
        assert!(t.shadows.contains_key(k));
    }

    assert_eq!(t.color("primary"), "#112233");
    assert_eq!(t.color("brand"), "#445566");
    assert_eq!(t.color("secondary"), d.color("secondary"));
    assert_eq!(t.spacing("4"), 20.0);
    assert_eq!(t.spacing("6"), 24.0);
    assert_eq!(t.radius("md"), 8.0);
    assert_eq!(t.shadow("glow"), "0px 0px 12px 0px #3B82F680");
}

#[test]
fn typography_merges_per_field() {
    let user = ds(json!({
        "typography": { "fontFamily": "Geist", "scale": { "h1": { "size": 40, "weight": "bold" } } }
    }));
    let t = resolve_tokens(Some(&user), ThemeMode::Light);
    let h1 = t.typo(TypoKey::H1);
    assert_eq!(h1.size, 40.0);
    assert_eq!(h1.weight, 700);
    assert_eq!(h1.line_height, 1.2);
    assert_eq!(t.font_family, "Geist");
}

#[test]
fn spacing_unit_rescales_default_scale() {
    let user = ds(json!({ "spacing": { "unit": 8 } }));
    let t = resolve_tokens(Some(&user), ThemeMode::Light);
    assert_eq!(t.spacing("4"), 32.0);
    assert_eq!(t.spacing("6"), 48.0);
}

#[test]
fn non_string_colors_fall_back_to_defaults() {
    let user = ds(json!({ "colorPalette": { "primary": { "500": "#000" } } }));
    let t = resolve_tokens(Some(&user), ThemeMode::Light);
    assert_eq!(t.color("primary"), "#3B82F6");
}

#[test]
fn dark_theme_uses_dark_palette_overrides() {
    let user = ds(json!({
        "colorPalette": { "background": "#FFFFFF" },
        "darkColorPalette": { "background": "#000000" }
    }));
    let t = resolve_tokens(Some(&user), ThemeMode::Dark);
    assert_eq!(t.color("background"), "#000000");
    assert_eq!(t.color("text"), "#F8FAFC");
}

#[test]
fn section_gradient_prefers_stored_token() {
    let d = TokenSet::defaults(ThemeMode::Light);
    assert_eq!(
        d.section_gradient(),
        "linear-gradient(135deg, #3B82F61A 0%, #8B5CF61A 100%)"
    );
    let user = ds(json!({
        "colorPalette": { "gradient": "linear-gradient(90deg, #000 0%, #fff 100%)" }
    }));
    let t = resolve_tokens(Some(&user), ThemeMode::Light);
    assert_eq!(
        t.section_gradient(),
        "linear-gradient(90deg, #000 0%, #fff 100%)"
    );
}

#[test]
fn resolved_tokens_fold_in_font_family() {
    let r = TokenSet::defaults(ThemeMode::Light).resolved();
    let body = &r.typography["body"];
    assert_eq!(body.font_size, 16.0);
    assert_eq!(body.font_family, defaults::FONT_FAMILY);
    assert_eq!(r.spacing["6"], 24.0);
}
