use super::*;
use serde_json::json;

fn node(v: serde_json::Value) -> ComponentNode {
    serde_json::from_value(v).unwrap()
}

fn props(v: serde_json::Value) -> PropsMap {
    v.as_object().cloned().unwrap()
}

#[test]
fn type_names_fold_aliases_to_canonical_kinds() {
    assert_eq!(ComponentKind::from_type_name("button"), ComponentKind::Button);
    assert_eq!(ComponentKind::from_type_name("Button"), ComponentKind::Button);
    assert_eq!(
        ComponentKind::from_type_name("search-bar"),
        ComponentKind::SearchBar
    );
    assert_eq!(
        ComponentKind::from_type_name("progress_bar"),
        ComponentKind::ProgressBar
    );
    assert_eq!(
        ComponentKind::from_type_name("hologram"),
        ComponentKind::Unknown("hologram".to_owned())
    );
    assert_eq!(ComponentKind::canonical_name("date-picker"), Some("datePicker"));
    assert_eq!(ComponentKind::canonical_name("hologram"), None);
}

#[test]
fn known_kinds_round_trip_through_their_names() {
    for k in ComponentKind::KNOWN.iter() {
        assert!(k.is_known());
        assert_eq!(&ComponentKind::from_type_name(k.as_str()), k);
    }
}

#[test]
fn containers_and_labelled_kinds() {
    assert!(ComponentKind::Card.is_container());
    assert!(!ComponentKind::Button.is_container());
    assert!(ComponentKind::Button.requires_label());
    assert!(ComponentKind::SearchBar.requires_label());
    assert!(!ComponentKind::Divider.requires_label());
}

#[test]
fn enum_prop_distinguishes_absent_valid_and_invalid() {
    let p = props(json!({ "variant": "outline", "size": "huge", "n": null }));
    assert_eq!(
        enum_prop::<ButtonVariant>(&p, "variant"),
        PropValue::Valid(ButtonVariant::Outline)
    );
    assert_eq!(
        enum_prop::<Size3>(&p, "size"),
        PropValue::Invalid("\"huge\"".to_owned())
    );
    assert_eq!(enum_prop::<Size3>(&p, "n"), PropValue::Absent);
    assert_eq!(enum_prop::<Size3>(&p, "missing"), PropValue::Absent);
}

#[test]
fn number_prop_accepts_numeric_strings() {
    let p = props(json!({ "a": 12.5, "b": "40", "c": "lots", "d": true }));
    assert_eq!(number_prop(&p, "a"), PropValue::Valid(12.5));
    assert_eq!(number_prop(&p, "b"), PropValue::Valid(40.0));
    assert!(matches!(number_prop(&p, "c"), PropValue::Invalid(_)));
    assert!(matches!(number_prop(&p, "d"), PropValue::Invalid(_)));
}

#[test]
fn items_prop_reads_strings_and_labelled_objects() {
    let p = props(json!({ "items": ["Home", { "label": "Docs" }, { "href": "/x" }, 3] }));
    assert_eq!(items_prop(&p, "items"), vec!["Home", "Docs", "3"]);
    assert!(items_prop(&p, "missing").is_empty());
}

#[test]
fn unrecognized_values_fall_back_to_none() {
    let c = Component::from_node(&node(json!({
        "type": "button",
        "label": "Go",
        "props": { "variant": "neon", "size": "lg", "width": "1/2" }
    })));
    assert_eq!(c.kind, ComponentKind::Button);
    assert_eq!(
        c.props,
        Props::Button(ButtonProps {
            variant: None,
            size: Some(Size3::Lg),
            icon: None,
        })
    );
    assert_eq!(c.common.width, Some(WidthToken::Half));
}

#[test]
fn stepper_steps_accept_count_or_list() {
    let counted = Props::parse(&ComponentKind::Stepper, &props(json!({ "steps": 4, "current": 1 })));
    let Props::Stepper(s) = counted else {
        panic!("expected stepper props");
    };
    assert_eq!(s.steps.len(), 4);
    assert_eq!(s.current, Some(1));

    let listed = Props::parse(
        &ComponentKind::Stepper,
        &props(json!({ "steps": ["Cart", "Pay"] })),
    );
    let Props::Stepper(s) = listed else {
        panic!("expected stepper props");
    };
    assert_eq!(s.steps, vec!["Cart", "Pay"]);
}

#[test]
fn from_node_recurses_and_tolerates_missing_type() {
    let c = Component::from_node(&node(json!({
        "type": "card",
        "children": [{ "type": "heading", "label": "Title" }, { "label": "orphan" }]
    })));
    assert_eq!(c.children.len(), 2);
    assert_eq!(c.children[0].kind, ComponentKind::Heading);
    assert_eq!(c.children[1].kind, ComponentKind::Unknown(String::new()));
    assert_eq!(c.children[1].label_str(), "orphan");
}

#[test]
fn width_token_percentages() {
    assert_eq!(WidthToken::Half.percent(), Some(50.0));
    assert_eq!(WidthToken::Auto.percent(), None);
    assert!((AspectRatio::Wide.height_over_width() - 0.5625).abs() < 1e-12);
}
