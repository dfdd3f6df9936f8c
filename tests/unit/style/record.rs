use super::*;
use serde_json::json;

#[test]
fn sparse_record_serializes_only_set_fields() {
    let r = StyleRecord {
        background_color: Some("transparent".to_owned()),
        border: Some(Border::solid(1.5, "#3B82F6")),
        ..StyleRecord::default()
    };
    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        json!({ "backgroundColor": "transparent", "border": "1.5px solid #3B82F6" })
    );
    assert!(StyleRecord::default().is_empty());
}

#[test]
fn display_and_font_flatten_into_the_record() {
    let r = StyleRecord {
        display: Some(Display::Grid {
            grid_template_columns: GridColumns::AutoFit { min: 280.0 },
            gap: 24.0,
        }),
        font: Some(FontStyle {
            font_family: None,
            font_size: 16.0,
            font_weight: 400,
            line_height: 1.6,
            letter_spacing: 0.0,
        }),
        ..StyleRecord::default()
    };
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["display"], "grid");
    assert_eq!(v["gridTemplateColumns"], "repeat(auto-fit, minmax(280px, 1fr))");
    assert_eq!(v["gap"], 24.0);
    assert_eq!(v["fontSize"], 16.0);
}

#[test]
fn flex_row_centers_cross_axis() {
    let d = Display::flex(FlexDirection::Row, 16.0);
    assert!(d.is_row());
    let v = serde_json::to_value(StyleRecord {
        display: Some(d),
        ..StyleRecord::default()
    })
    .unwrap();
    assert_eq!(v["flexDirection"], "row");
    assert_eq!(v["alignItems"], "center");
    assert_eq!(Display::Block.gap(), 0.0);
}

#[test]
fn grid_templates_render_as_css() {
    assert_eq!(GridColumns::Repeat(3).to_css(), "repeat(3, 1fr)");
    assert_eq!(
        GridColumns::Sidebar {
            side: Side::Right,
            width: 280.0
        }
        .to_css(),
        "1fr 280px"
    );
    assert_eq!(GridColumns::Halves.to_css(), "1fr 1fr");
}

#[test]
fn width_resolves_against_slot() {
    assert_eq!(Width::Percent(50.0).resolve(600.0, None), 300.0);
    assert_eq!(Width::Px(900.0).resolve(600.0, None), 600.0);
    assert_eq!(Width::Auto.resolve(600.0, Some(120.0)), 120.0);
    assert_eq!(Width::Auto.resolve(600.0, None), 600.0);
    assert_eq!(
        serde_json::to_value(Width::Percent(100.0 / 3.0)).unwrap(),
        json!("33.3333%")
    );
}
