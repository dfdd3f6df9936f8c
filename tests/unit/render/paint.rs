use super::*;

#[test]
fn rounded_rect_radius_is_clamped() {
    let cmd = PaintCmd::rounded_rect(Rect::new(0.0, 0.0, 100.0, 20.0), 9999.0, None, None);
    let PaintCmd::RoundedRect(r) = cmd else {
        panic!("expected rounded rect");
    };
    assert_eq!(r.radius(), 10.0);

    let cmd = PaintCmd::rounded_rect(Rect::new(0.0, 0.0, 100.0, 20.0), -4.0, None, None);
    let PaintCmd::RoundedRect(r) = cmd else {
        panic!("expected rounded rect");
    };
    assert_eq!(r.radius(), 0.0);

    let cmd = PaintCmd::rounded_rect(Rect::new(10.0, 10.0, 0.0, 0.0), 8.0, None, None);
    let PaintCmd::RoundedRect(r) = cmd else {
        panic!("expected rounded rect");
    };
    assert_eq!(r.rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(r.radius(), 5.0);

    let direct = RoundedRect::new(Rect::new(0.0, 0.0, 30.0, 8.0), f64::INFINITY, None, None);
    assert_eq!(direct.radius(), 0.0);
    let direct = RoundedRect::new(Rect::new(0.0, 0.0, 30.0, 8.0), 12.0, None, None);
    assert_eq!(direct.radius(), 4.0);
}

#[test]
fn paint_colors_substitute_unsupported_notation() {
    assert_eq!(paint_color("#3B82F6"), Some(Rgba8::opaque(0x3B, 0x82, 0xF6)));
    assert_eq!(paint_color("rgba(0, 0, 0, 0.1)"), Some(FALLBACK_FUNCTION_COLOR));
    assert_eq!(paint_color("hsl(10, 50%, 50%)"), Some(FALLBACK_FUNCTION_COLOR));
    assert_eq!(
        paint_color("linear-gradient(135deg, #fff 0%, #000 100%)"),
        Some(FALLBACK_GRADIENT_COLOR)
    );
    assert_eq!(paint_color("transparent"), None);
    assert_eq!(paint_color("#00000000"), None);
    assert_eq!(paint_color("blurple"), Some(FALLBACK_FUNCTION_COLOR));
}

#[test]
fn commands_serialize_with_op_tag() {
    let cmd = PaintCmd::Rect {
        rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        fill: Rgba8::opaque(0, 0, 0),
    };
    let v = serde_json::to_value(&cmd).unwrap();
    assert_eq!(v["op"], "rect");
    let v = serde_json::to_value(PaintCmd::rounded_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        1.0,
        None,
        None,
    ))
    .unwrap();
    assert_eq!(v["op"], "roundedRect");
    assert_eq!(v["radius"], 1.0);
    assert!(v.get("fill").is_none());
}

#[test]
fn bounds_cover_circles_and_lines() {
    let c = PaintCmd::Circle {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        fill: None,
        stroke: None,
    };
    assert_eq!(c.bounds(), Rect::new(5.0, 5.0, 15.0, 15.0));
    let l = PaintCmd::Line {
        from: Point::new(4.0, 0.0),
        to: Point::new(0.0, 2.0),
        stroke: Stroke {
            width: 1.0,
            color: Rgba8::opaque(0, 0, 0),
        },
    };
    assert_eq!(l.bounds(), Rect::new(0.0, 0.0, 4.0, 2.0));
}
