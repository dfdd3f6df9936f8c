use super::*;
use crate::schema::issue::IssueCode;
use serde_json::json;

fn doc(v: serde_json::Value) -> Document {
    Document::from_value(v).unwrap()
}

#[test]
fn defaults_match_the_documented_values() {
    let o = PipelineOpts::default();
    assert_eq!(o.viewport_width, 1440.0);
    assert!(o.auto_fix);
    assert!(!o.parallel);
    assert_eq!(o.theme, ThemeMode::Light);
}

#[test]
fn overrides_apply_viewport_and_seed() {
    let o = PipelineOpts::default()
        .with_overrides(|k| match k {
            ENV_VIEWPORT_WIDTH => Some(" 768 ".to_owned()),
            ENV_CHART_SEED => Some("42".to_owned()),
            _ => None,
        })
        .unwrap();
    assert_eq!(o.viewport_width, 768.0);
    assert_eq!(o.chart_seed, 42);
}

#[test]
fn bad_overrides_are_reported() {
    let width = PipelineOpts::default().with_overrides(|k| {
        (k == ENV_VIEWPORT_WIDTH).then(|| "-3".to_owned())
    });
    assert!(width.is_err());
    let seed = PipelineOpts::default().with_overrides(|k| {
        (k == ENV_CHART_SEED).then(|| "abc".to_owned())
    });
    assert!(seed.is_err());
}

#[test]
fn run_fixes_then_validates_then_paints() {
    let out = run(
        doc(json!({ "screens": [{ "name": "Home", "sections": [{
            "layout": "Row",
            "components": [{ "type": "Button", "label": "Go" }]
        }]}]})),
        &PipelineOpts::default(),
    )
    .unwrap();
    assert!(!out.fixes.is_empty());
    assert!(out.validation.valid);
    assert_eq!(out.styled.screens.len(), 1);
    assert_eq!(out.pages.len(), 1);
    assert_eq!(out.pages[0].width, 1440.0);
}

#[test]
fn invalid_documents_still_render() {
    let out = run(
        doc(json!([{ "sections": [] }])),
        &PipelineOpts::default().with_auto_fix(false),
    )
    .unwrap();
    assert!(out.fixes.is_empty());
    assert!(!out.validation.valid);
    assert!(out.validation.has(IssueCode::MissingScreenName));
    assert_eq!(out.pages.len(), 1);
    assert_eq!(out.pages[0].height, 600.0);
}

#[test]
fn output_serializes_without_the_token_set() {
    let out = run(
        doc(json!([{ "name": "A", "sections": [{ "components": [{ "type": "text", "label": "x" }] }] }])),
        &PipelineOpts::default(),
    )
    .unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert!(v["styled"]["resolvedTokens"].is_object());
    assert!(v["styled"].get("tokens").is_none());
    assert_eq!(v["pages"][0]["screen"], "A");
}
