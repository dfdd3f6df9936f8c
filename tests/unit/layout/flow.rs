use super::*;
use crate::layout::estimate::screen_height;
use crate::render::paint::PaintCmd;
use crate::render::painter::paint_screen;
use crate::style::resolve::{Beautified, beautify};
use crate::tokens::set::ThemeMode;
use serde_json::json;

fn styled(v: serde_json::Value) -> Beautified {
    let screens: Vec<crate::scene::model::Screen> = serde_json::from_value(v).unwrap();
    beautify(&screens, None, ThemeMode::Light)
}

#[test]
fn row_buttons_split_the_inner_width_and_center_at_the_top() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "row",
        "components": [
            { "type": "button", "label": "One" },
            { "type": "button", "label": "Two" }
        ]
    }]}]));
    let placed = place_screen(&b.screens[0], 1440.0);
    let section = &placed.sections[0];
    let slots = &section.content.slots;
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].width(), 688.0);
    assert_eq!(slots[1].width(), 688.0);
    assert_eq!(slots[0].x0, 24.0);
    assert_eq!(slots[1].x0, 24.0 + 688.0 + 16.0);
    for b in &section.content.boxes {
        assert_eq!(b.y0, section.rect.y0 + 24.0);
        assert_eq!(b.height(), 40.0);
    }

    // Buttons are drawn at their intrinsic width from the left edge of their 688 slot.
    let intrinsic = (3.0 * 16.0 * CHAR_WIDTH_RATIO + 40.0_f64).max(64.0);
    for (slot, b) in slots.iter().zip(&section.content.boxes) {
        assert_eq!(b.x0, slot.x0);
        assert!((b.width() - intrinsic).abs() < 1e-9);
        assert!(b.x1 <= slot.x1);
    }
    let page = paint_screen(&b.screens[0], &b.tokens, 1440.0, 0).unwrap();
    let painted: Vec<Rect> = page
        .commands
        .iter()
        .filter_map(|c| match c {
            PaintCmd::RoundedRect(r) => Some(r.rect()),
            _ => None,
        })
        .collect();
    assert_eq!(painted, section.content.boxes);
}

#[test]
fn row_children_are_centered_on_the_cross_axis() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "row",
        "components": [
            { "type": "button", "label": "Short" },
            { "type": "textarea", "label": "Tall" }
        ]
    }]}]));
    let placed = place_screen(&b.screens[0], 1000.0);
    let content = &placed.sections[0].content;
    assert_eq!(content.height, 116.0);
    assert_eq!(content.boxes[0].y0 - content.boxes[1].y0, (116.0 - 40.0) / 2.0);
}

#[test]
fn auto_fit_grid_columns_follow_the_width_only() {
    assert_eq!(grid_column_count(GridColumns::AutoFit { min: 280.0 }, 1392.0), 4);
    assert_eq!(grid_column_count(GridColumns::AutoFit { min: 280.0 }, 100.0), 1);
    assert_eq!(grid_column_count(GridColumns::Repeat(3), 1392.0), 3);
    assert_eq!(grid_column_count(GridColumns::Halves, 1392.0), 2);
}

#[test]
fn two_cards_in_an_auto_fit_grid_keep_quarter_width_slots() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "grid",
        "components": [{ "type": "card" }, { "type": "card" }]
    }]}]));
    let placed = place_screen(&b.screens[0], 1440.0);
    let content = &placed.sections[0].content;
    // (1392 - 3 * 24) / 4
    assert_eq!(content.slots[0].width(), 330.0);
    assert_eq!(content.slots[1].x0, 24.0 + 330.0 + 24.0);
    assert_eq!(content.boxes[1].width(), 330.0);
    assert_eq!(content.height, 160.0);
}

#[test]
fn split_keeps_two_columns_and_wraps_extra_children() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "split",
        "components": [{ "type": "card" }, { "type": "card" }, { "type": "card" }]
    }]}]));
    let placed = place_screen(&b.screens[0], 1440.0);
    let content = &placed.sections[0].content;
    // split gap is spacing 8 (32): (1392 - 32) / 2
    assert_eq!(content.slots[0].width(), 680.0);
    assert_eq!(content.slots[2].x0, content.slots[0].x0);
    assert_eq!(content.slots[2].y0, content.slots[0].y0 + 160.0 + 32.0);
    assert_eq!(content.height, 160.0 + 32.0 + 160.0);
}

#[test]
fn grid_rows_stack_with_gaps() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "grid",
        "columns": 2,
        "components": [
            { "type": "stat", "label": "a" },
            { "type": "stat", "label": "b" },
            { "type": "stat", "label": "c" }
        ]
    }]}]));
    let placed = place_screen(&b.screens[0], 1000.0);
    let content = &placed.sections[0].content;
    assert_eq!(content.height, 88.0 + 24.0 + 88.0);
    assert_eq!(content.slots[2].x0, content.slots[0].x0);
    assert_eq!(content.slots[2].y0, content.slots[0].y0 + 88.0 + 24.0);
}

#[test]
fn sidebar_left_puts_first_component_in_the_side_column() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "sidebar-left",
        "components": [
            { "type": "sidebar", "props": { "items": ["A", "B"] } },
            { "type": "heading", "label": "Main", "props": { "size": "xl" } },
            { "type": "text", "label": "Body" }
        ]
    }]}]));
    let placed = place_screen(&b.screens[0], 1440.0);
    let content = &placed.sections[0].content;
    assert_eq!(content.slots[0].width(), 280.0);
    assert_eq!(content.slots[1].x0, 24.0 + 280.0 + 24.0);
    assert_eq!(content.slots[2].y0, content.slots[1].y1 + 24.0);
    assert_eq!(content.height, 400.0);
}

#[test]
fn sidebar_right_uses_the_last_component() {
    let b = styled(json!([{ "name": "S", "sections": [{
        "layout": "sidebar-right",
        "components": [
            { "type": "text", "label": "Body" },
            { "type": "card" }
        ]
    }]}]));
    let placed = place_screen(&b.screens[0], 1440.0);
    let content = &placed.sections[0].content;
    assert_eq!(content.slots[1].width(), 280.0);
    assert_eq!(content.slots[1].x1, 1440.0 - 24.0);
    assert_eq!(content.slots[0].x0, 24.0);
}

#[test]
fn empty_sections_are_skipped_and_page_is_floored() {
    let b = styled(json!([{ "name": "S", "sections": [
        { "components": [] },
        { "components": [{ "type": "divider" }] }
    ]}]));
    let placed = place_screen(&b.screens[0], 800.0);
    assert_eq!(placed.sections.len(), 1);
    assert_eq!(placed.sections[0].index, 1);
    assert_eq!(placed.sections[0].rect.y0, 0.0);
    assert_eq!(placed.height, 600.0);
}

#[test]
fn placement_and_estimate_agree() {
    let b = styled(json!([{ "name": "Landing", "sections": [
        { "layout": "row", "components": [
            { "type": "nav", "props": { "items": ["Home", "Pricing"] }, "children": [
                { "type": "link", "label": "Docs" }, { "type": "button", "label": "Sign in" }
            ]}
        ]},
        { "layout": "column", "padding": "xl", "components": [
            { "type": "hero", "children": [
                { "type": "heading", "label": "Build wireframes faster than ever before", "props": { "size": "display" } },
                { "type": "text", "label": "A long paragraph of supporting copy that will certainly wrap across more than one line at narrow widths." },
                { "type": "button", "label": "Get started", "props": { "size": "lg" } }
            ]}
        ]},
        { "layout": "grid", "components": [
            { "type": "card", "children": [{ "type": "chart", "props": { "chartType": "line" } }] },
            { "type": "card", "children": [{ "type": "table", "props": { "columns": ["a", "b"] } }] },
            { "type": "card", "children": [{ "type": "input", "label": "Email" }] },
            { "type": "image", "label": "x", "props": { "size": "lg" } }
        ]},
        { "layout": "split", "components": [
            { "type": "form", "children": [{ "type": "select", "label": "Plan" }, { "type": "checkbox", "label": "Agree" }] },
            { "type": "testimonial", "children": [{ "type": "avatar", "props": { "size": "xl" } }] }
        ]},
        { "layout": "sidebar-right", "components": [
            { "type": "list", "props": { "items": ["a"] } },
            { "type": "sidebar" }
        ]}
    ]}]));
    for width in [375.0, 768.0, 1440.0, 1920.0] {
        let placed = place_screen(&b.screens[0], width);
        assert_eq!(placed.height, screen_height(&b.screens[0], width), "width {width}");
    }
}
