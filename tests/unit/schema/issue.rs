use super::*;

#[test]
fn path_formats_fields_indices_and_keys() {
    let mut p = IssuePath::root();
    assert_eq!(p.to_string(), "$");
    p.push_field("screens");
    p.push_index(0);
    p.push_field("sections");
    p.push_index(2);
    assert_eq!(p.to_string(), "$.screens[0].sections[2]");
    p.pop();
    p.pop();
    p.push_field("designSystem");
    p.push_key("primary");
    assert_eq!(p.to_string(), "$.screens[0].designSystem.primary");
}

#[test]
fn result_counts_by_severity() {
    let p = IssuePath::root();
    let issues = vec![
        ValidationIssue::at(&p, IssueCode::MissingScreenName, "a"),
        ValidationIssue::at(&p, IssueCode::MissingLabel, "b"),
        ValidationIssue::at(&p, IssueCode::NoPrimaryHeading, "c"),
        ValidationIssue::at(&p, IssueCode::NoPrimaryHeading, "d"),
    ];
    let r = ValidationResult::from_issues(issues, ValidationStats::default());
    assert!(!r.valid);
    assert_eq!(r.stats.errors, 1);
    assert_eq!(r.stats.warnings, 1);
    assert_eq!(r.stats.infos, 2);
    assert_eq!(r.count(IssueCode::NoPrimaryHeading), 2);
}

#[test]
fn issue_serializes_codes_in_screaming_case() {
    let issue = ValidationIssue::at(
        &IssuePath::root().with_field("screens"),
        IssueCode::InvalidProgressValue,
        "out of range",
    )
    .with_fix("clamp to 0..=100");
    let v = serde_json::to_value(&issue).unwrap();
    assert_eq!(v["code"], "INVALID_PROGRESS_VALUE");
    assert_eq!(v["severity"], "warning");
    assert_eq!(v["path"], "$.screens");
    assert_eq!(v["fix"], "clamp to 0..=100");
}
