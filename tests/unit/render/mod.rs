use super::*;
use crate::scene::model::Screen;
use crate::style::resolve::beautify;
use crate::tokens::set::ThemeMode;
use serde_json::json;

fn styled() -> Beautified {
    let screens: Vec<Screen> = serde_json::from_value(json!([
        { "name": "Login", "sections": [{ "components": [
            { "type": "input", "label": "Email" },
            { "type": "button", "label": "Sign in" }
        ]}]},
        { "name": "Dashboard", "sections": [{ "layout": "grid", "components": [
            { "type": "stat", "label": "Revenue", "props": { "value": "$12k", "trend": "up" } },
            { "type": "chart", "props": { "chartType": "area" } }
        ]}]},
        { "name": "Empty", "sections": [] }
    ]))
    .unwrap();
    beautify(&screens, None, ThemeMode::Light)
}

#[test]
fn one_page_per_screen_in_order() {
    let pages = render(&styled(), 1440.0, &RenderOpts::default()).unwrap();
    let names: Vec<_> = pages.iter().map(|p| p.screen.as_str()).collect();
    assert_eq!(names, ["Login", "Dashboard", "Empty"]);
}

#[test]
fn parallel_matches_sequential() {
    let b = styled();
    let seq = render(&b, 768.0, &RenderOpts::default().with_chart_seed(3)).unwrap();
    let par = render(
        &b,
        768.0,
        &RenderOpts::default()
            .with_chart_seed(3)
            .with_parallel(true)
            .with_threads(Some(2)),
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let opts = RenderOpts::default()
        .with_parallel(true)
        .with_threads(Some(0));
    assert!(render(&styled(), 1440.0, &opts).is_err());
}

#[test]
fn bad_viewport_fails_the_whole_render() {
    assert!(render(&styled(), -1.0, &RenderOpts::default()).is_err());
}
