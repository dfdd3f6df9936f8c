use super::*;
use crate::scene::model::Loose;

#[test]
fn parses_wrapped_document_with_design_system() {
    let json = r##"{
        "screens": [{ "name": "Home", "sections": [{ "layout": "row", "components": [] }] }],
        "designSystem": { "colorPalette": { "primary": "#112233" } }
    }"##;
    let doc = Document::from_reader(json.as_bytes()).unwrap();
    assert_eq!(doc.screens().len(), 1);
    assert_eq!(doc.screens()[0].name_str(), "Home");
    assert!(doc.design_system().is_some());
}

#[test]
fn parses_bare_screen_array_and_screen_name_alias() {
    let json = r#"[{ "screenName": "Login" }]"#;
    let doc = Document::from_reader(json.as_bytes()).unwrap();
    assert_eq!(doc.screens()[0].name_str(), "Login");
    assert!(doc.screens()[0].sections().is_empty());
}

#[test]
fn incomplete_documents_still_load() {
    let json = r#"{ "screens": [{ "sections": [{ "components": [{ "label": "x" }] }] }] }"#;
    let doc = Document::from_reader(json.as_bytes()).unwrap();
    let comp = &doc.screens()[0].sections()[0].components()[0];
    assert!(comp.kind.is_none());
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = Document::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, WirecraftError::Validation(_)));
    assert!(err.to_string().contains("parse wireframe JSON"));
}

#[test]
fn missing_file_reports_path() {
    let err = Document::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn mistyped_fields_load_and_round_trip() {
    let json = r#"[{ "name": "Home", "sections": [{
        "padding": 24,
        "columns": "3",
        "components": [{ "type": "text", "label": 42 }]
    }] }]"#;
    let doc = Document::from_reader(json.as_bytes()).unwrap();
    let section = &doc.screens()[0].sections()[0];
    assert!(section.padding_str().is_none());
    assert_eq!(
        section.padding.as_ref().and_then(Loose::invalid),
        Some(&serde_json::json!(24))
    );
    assert_eq!(section.column_count(), Some(3));

    let comp = &section.components()[0];
    assert_eq!(comp.kind_str(), Some("text"));
    assert!(comp.label_str().is_none());

    let back = serde_json::to_value(doc.def()).unwrap();
    assert_eq!(back["screens"][0]["sections"][0]["padding"], 24);
    assert_eq!(back["screens"][0]["sections"][0]["components"][0]["label"], 42);
}
