use super::*;
use crate::schema::issue::Severity;
use serde_json::json;

fn screens(v: serde_json::Value) -> Vec<Screen> {
    serde_json::from_value(v).unwrap()
}

fn nested(depth: usize) -> serde_json::Value {
    let mut node = json!({ "type": "card" });
    for _ in 1..depth {
        node = json!({ "type": "card", "children": [node] });
    }
    node
}

#[test]
fn nameless_screen_without_sections_reports_exactly_two_errors() {
    let r = validate(&screens(json!([{ "screenName": "", "sections": [] }])), None);
    assert!(!r.valid);
    let codes: Vec<_> = r.errors().map(|i| i.code).collect();
    assert_eq!(
        codes,
        vec![IssueCode::MissingScreenName, IssueCode::EmptySections]
    );
    assert_eq!(r.stats.errors, 2);
    assert_eq!(r.issues[0].path, "$.screens[0].name");
    assert_eq!(r.issues[1].path, "$.screens[0].sections");
}

#[test]
fn depth_bound_reports_first_overflowing_node_only() {
    let doc = screens(json!([{
        "name": "Deep",
        "sections": [{ "components": [nested(12)] }]
    }]));
    let r = validate(&doc, None);
    assert_eq!(r.count(IssueCode::MaxDepthExceeded), 1);
    let issue = r
        .issues
        .iter()
        .find(|i| i.code == IssueCode::MaxDepthExceeded)
        .unwrap();
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(
        issue.path.matches(".children[0]").count(),
        MAX_DEPTH,
        "reported at depth {} ({})",
        MAX_DEPTH + 1,
        issue.path
    );
    assert_eq!(r.stats.components, MAX_DEPTH + 1);
    assert_eq!(r.stats.max_depth, MAX_DEPTH + 1);
}

#[test]
fn depth_at_the_limit_is_fine() {
    let doc = screens(json!([{
        "name": "Deep",
        "sections": [{ "components": [nested(MAX_DEPTH)] }]
    }]));
    let r = validate(&doc, None);
    assert!(!r.has(IssueCode::MaxDepthExceeded));
    assert_eq!(r.stats.max_depth, MAX_DEPTH);
}

#[test]
fn section_fields_are_checked() {
    let r = validate(
        &screens(json!([{
            "name": "S",
            "sections": [
                { "layout": "masonry", "padding": "huge", "background": "navy", "components": [] },
                { "layout": "sidebar-left", "padding": "lg", "background": "gradient" },
                { "background": "#F8FAFC" }
            ]
        }])),
        None,
    );
    assert_eq!(r.count(IssueCode::InvalidLayout), 1);
    assert_eq!(r.count(IssueCode::InvalidPadding), 1);
    assert_eq!(r.count(IssueCode::NonHexBackground), 1);
    assert!(r.valid);
    assert_eq!(r.stats.sections, 3);
}

#[test]
fn component_checks_dispatch_per_kind() {
    let r = validate(
        &screens(json!([{
            "name": "Form",
            "sections": [{ "components": [
                { "label": "no type" },
                { "type": "hologram", "label": "x" },
                { "type": "button", "label": "Go", "props": { "variant": "neon", "width": "1/5" } },
                { "type": "slider", "label": "Vol", "props": { "min": 10, "max": 2 } },
                { "type": "progressBar", "props": { "value": 140 } },
                { "type": "text", "label": "Lorem ipsum dolor sit amet" },
                { "type": "divider", "children": [{ "type": "text", "label": "inside" }] },
                { "type": "button" }
            ]}]
        }])),
        None,
    );
    assert_eq!(r.count(IssueCode::MissingType), 1);
    assert_eq!(r.count(IssueCode::UnknownComponentType), 1);
    assert_eq!(r.count(IssueCode::InvalidPropValue), 2);
    assert_eq!(r.count(IssueCode::InvalidSliderRange), 1);
    assert_eq!(r.count(IssueCode::InvalidProgressValue), 1);
    assert_eq!(r.count(IssueCode::PlaceholderContent), 1);
    assert_eq!(r.count(IssueCode::UnexpectedChildren), 1);
    assert_eq!(r.count(IssueCode::MissingLabel), 1);

    let progress = r
        .issues
        .iter()
        .find(|i| i.code == IssueCode::InvalidProgressValue)
        .unwrap();
    assert_eq!(progress.severity, Severity::Warning);
    assert_eq!(
        progress.path,
        "$.screens[0].sections[0].components[4].props.value"
    );
    assert_eq!(r.stats.components, 9);
    assert_eq!(r.stats.max_depth, 2);
}

#[test]
fn type_aliases_are_not_unknown() {
    let r = validate(
        &screens(json!([{
            "name": "A",
            "sections": [{ "components": [{ "type": "search-bar", "label": "Find" }] }]
        }])),
        None,
    );
    assert!(!r.has(IssueCode::UnknownComponentType));
}

#[test]
fn screen_heuristics() {
    let r = validate(
        &screens(json!([{
            "name": "Landing",
            "sections": [{ "components": [
                {
                    "type": "nav",
                    "props": { "items": ["A", "B", "C", "D", "E"] },
                    "children": [{ "type": "link", "label": "F" }, { "type": "button", "label": "G" }]
                },
                { "type": "heading", "label": "Welcome", "props": { "size": "lg" } },
                { "type": "button", "label": "1", "props": { "variant": "primary" } },
                { "type": "button", "label": "2", "props": { "variant": "primary" } },
                { "type": "button", "label": "3", "props": { "variant": "primary" } },
                { "type": "button", "label": "4", "props": { "variant": "primary" } },
                { "type": "input" },
                { "type": "select", "label": "Country" }
            ]}]
        }])),
        None,
    );
    assert_eq!(r.count(IssueCode::NoPrimaryHeading), 1);
    assert_eq!(r.count(IssueCode::ExcessiveCtas), 1);
    assert_eq!(r.count(IssueCode::NavTooManyItems), 1);
    assert_eq!(r.count(IssueCode::InputMissingLabel), 1);
}

#[test]
fn primary_heading_satisfies_heuristic() {
    let r = validate(
        &screens(json!([{
            "name": "Landing",
            "sections": [{ "components": [
                { "type": "card", "children": [
                    { "type": "heading", "label": "Big", "props": { "size": "display" } }
                ]}
            ]}]
        }])),
        None,
    );
    assert!(!r.has(IssueCode::NoPrimaryHeading));
    assert!(r.valid);
}

#[test]
fn duplicate_screen_names_warn() {
    let r = validate(
        &screens(json!([
            { "name": "Home", "sections": [{}] },
            { "name": "Home", "sections": [{}] }
        ])),
        None,
    );
    assert_eq!(r.count(IssueCode::DuplicateScreenName), 1);
    assert!(r.valid);
}

#[test]
fn design_system_issues_are_rooted_under_design_system() {
    let ds: DesignSystem = serde_json::from_value(json!({ "colorPalette": {} })).unwrap();
    let r = validate(&[], Some(&ds));
    let issue = r
        .issues
        .iter()
        .find(|i| i.code == IssueCode::EmptyColorPalette)
        .unwrap();
    assert_eq!(issue.path, "$.designSystem.colorPalette");
}

#[test]
fn mistyped_fields_are_reported_at_their_paths() {
    let r = validate(
        &screens(json!([{ "name": "Home", "sections": [{
            "layout": "row",
            "padding": 24,
            "columns": "3",
            "background": 7,
            "fullWidth": "yes",
            "components": [
                { "type": "heading", "label": "Welcome", "props": { "size": "xl" } },
                { "type": "text", "label": 42 },
                { "type": 5 }
            ]
        }]}])),
        None,
    );
    let at = |suffix: &str| {
        let path = format!("$.screens[0].sections[0]{suffix}");
        r.issues.iter().find(|i| i.path == path).map(|i| i.code)
    };
    assert_eq!(at(".padding"), Some(IssueCode::InvalidPadding));
    assert_eq!(at(".columns"), Some(IssueCode::InvalidFieldType));
    assert_eq!(at(".background"), Some(IssueCode::NonHexBackground));
    assert_eq!(at(".fullWidth"), Some(IssueCode::InvalidFieldType));
    assert_eq!(at(".components[1].label"), Some(IssueCode::InvalidFieldType));
    assert_eq!(at(".components[2].type"), Some(IssueCode::MissingType));
    assert_eq!(r.stats.components, 3);
}

#[test]
fn mistyped_screen_name_and_sections_are_errors() {
    let r = validate(&screens(json!([{ "name": 12, "sections": "none" }])), None);
    let codes: Vec<_> = r.errors().map(|i| i.code).collect();
    assert_eq!(
        codes,
        vec![IssueCode::MissingScreenName, IssueCode::EmptySections]
    );
    assert!(r.issues[1].message.contains("not an array"));
}
