use super::*;
use serde_json::json;

fn screens(v: serde_json::Value) -> Vec<Screen> {
    serde_json::from_value(v).unwrap()
}

fn one_component(node: serde_json::Value) -> Beautified {
    beautify(
        &screens(json!([{ "name": "S", "sections": [{ "components": [node] }] }])),
        None,
        ThemeMode::Light,
    )
}

#[test]
fn outline_button_ignores_label() {
    for label in [json!("Sign up"), json!(null)] {
        let b = one_component(json!({
            "type": "button",
            "label": label,
            "props": { "variant": "outline" }
        }));
        let style = serde_json::to_value(&b.screens[0].sections[0].components[0].style).unwrap();
        assert_eq!(style["backgroundColor"], "transparent");
        assert_eq!(style["color"], "#3B82F6");
        assert_eq!(style["border"], "1.5px solid #3B82F6");
    }
}

#[test]
fn button_colors_follow_design_system() {
    let ds: DesignSystem =
        serde_json::from_value(json!({ "colorPalette": { "primary": "#FF0000" } })).unwrap();
    let b = beautify(
        &screens(json!([{ "name": "S", "sections": [{ "components": [
            { "type": "button", "label": "x", "props": { "variant": "outline" } }
        ]}]}])),
        Some(&ds),
        ThemeMode::Light,
    );
    let style = &b.screens[0].sections[0].components[0].style;
    assert_eq!(style.border.as_ref().unwrap().to_css(), "1.5px solid #FF0000");
    assert_eq!(b.resolved_tokens.colors["primary"], "#FF0000");
    assert_eq!(b.resolved_tokens.colors["secondary"], "#8B5CF6");
}

#[test]
fn width_prop_overrides_dispatch_width() {
    let b = one_component(json!({
        "type": "image",
        "label": "Hero shot",
        "props": { "size": "lg", "aspectRatio": "1:1", "width": "1/2" }
    }));
    let style = &b.screens[0].sections[0].components[0].style;
    assert_eq!(style.width, Some(Width::Percent(50.0)));
    assert_eq!(style.height, Some(300.0));
}

#[test]
fn image_width_follows_aspect_ratio() {
    let b = one_component(json!({
        "type": "image",
        "label": "x",
        "props": { "size": "sm", "aspectRatio": "4:3" }
    }));
    let style = &b.screens[0].sections[0].components[0].style;
    assert_eq!(style.width, Some(Width::Px(160.0)));
}

#[test]
fn unknown_kinds_get_an_empty_style() {
    let b = one_component(json!({ "type": "hologram", "label": "x" }));
    assert!(b.screens[0].sections[0].components[0].style.is_empty());
}

#[test]
fn invalid_enum_values_fall_back_to_the_default_arm() {
    let b = one_component(json!({ "type": "button", "label": "x", "props": { "variant": "neon" } }));
    let style = &b.screens[0].sections[0].components[0].style;
    assert_eq!(style.background_color.as_deref(), Some("#3B82F6"));
}

#[test]
fn section_layouts_and_backgrounds() {
    let b = beautify(
        &screens(json!([{ "name": "S", "sections": [
            { "layout": "grid", "columns": 3, "background": "gradient", "padding": "xl" },
            { "layout": "grid", "background": "surface" },
            { "layout": "sidebar-right", "background": "#101010" },
            { "layout": "split" },
            { "layout": "nonsense" }
        ]}])),
        None,
        ThemeMode::Light,
    );
    let sections = &b.screens[0].sections;
    let v0 = serde_json::to_value(&sections[0].style).unwrap();
    assert_eq!(v0["gridTemplateColumns"], "repeat(3, 1fr)");
    assert_eq!(
        v0["backgroundImage"],
        "linear-gradient(135deg, #3B82F61A 0%, #8B5CF61A 100%)"
    );
    assert!(v0.get("backgroundColor").is_none());
    assert_eq!(sections[0].style.padding, Some(Edges::all(48.0)));

    let v1 = serde_json::to_value(&sections[1].style).unwrap();
    assert_eq!(v1["gridTemplateColumns"], "repeat(auto-fit, minmax(280px, 1fr))");
    assert_eq!(v1["backgroundColor"], "#F8FAFC");
    assert_eq!(sections[1].style.padding, Some(Edges::all(24.0)));

    let v2 = serde_json::to_value(&sections[2].style).unwrap();
    assert_eq!(v2["gridTemplateColumns"], "1fr 280px");
    assert_eq!(v2["backgroundColor"], "#101010");

    let v3 = serde_json::to_value(&sections[3].style).unwrap();
    assert_eq!(v3["gridTemplateColumns"], "1fr 1fr");
    assert_eq!(v3["gap"], 32.0);

    assert_eq!(sections[4].layout, LayoutMode::Column);
}

#[test]
fn beautify_is_idempotent() {
    let doc = screens(json!([{
        "name": "Dash",
        "sections": [{ "layout": "grid", "components": [
            { "type": "stat", "label": "Revenue", "props": { "value": "$12k", "trend": "up" } },
            { "type": "card", "children": [{ "type": "chart", "props": { "chartType": "bar" } }] },
            { "type": "badge", "label": "New", "props": { "variant": "success" } }
        ]}]
    }]));
    let a = serde_json::to_string(&beautify(&doc, None, ThemeMode::Dark)).unwrap();
    let b = serde_json::to_string(&beautify(&doc, None, ThemeMode::Dark)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn containers_receive_flow_and_page_has_min_height() {
    let b = one_component(json!({ "type": "card", "children": [{ "type": "text", "label": "x" }] }));
    let card = &b.screens[0].sections[0].components[0];
    assert!(matches!(card.style.display, Some(Display::Flex { .. })));
    assert_eq!(card.children.len(), 1);
    assert_eq!(b.screens[0].style.min_height, Some(MIN_PAGE_HEIGHT));
}

#[test]
fn mistyped_section_fields_fall_back_to_defaults() {
    let b = beautify(
        &screens(json!([{ "name": "S", "sections": [{
            "layout": "grid",
            "padding": 48,
            "columns": "3",
            "background": false,
            "components": [{ "type": "text", "label": 42 }]
        }]}])),
        None,
        ThemeMode::Light,
    );
    let section = &b.screens[0].sections[0];
    assert_eq!(section.style.padding, Some(Edges::all(24.0)));
    assert!(matches!(
        section.style.display,
        Some(Display::Grid {
            grid_template_columns: GridColumns::Repeat(3),
            ..
        })
    ));
    assert!(section.style.background_color.is_none());
    assert!(section.style.background_image.is_none());
    assert_eq!(section.components[0].label, None);
}
