use crate::scene::component::ComponentKind;
use crate::scene::model::{ComponentNode, LayoutMode, Loose, PropsMap, Screen};
use crate::schema::issue::{IssuePath, ValidationResult};
use crate::schema::validate::validate;
use crate::tokens::design_system::DesignSystem;
use serde::Serialize;

/// One in-place repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFix {
    pub path: String,
    pub description: String,
}

/// Repairs applied by [`auto_fix`], in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub fixes: Vec<AppliedFix>,
}

impl FixReport {
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    fn record(&mut self, path: &IssuePath, description: impl Into<String>) {
        self.fixes.push(AppliedFix {
            path: path.to_string(),
            description: description.into(),
        });
    }
}

/// Repair common generator defects in place.
///
/// Normalizes type-name spellings and layout names, fills absent props with `{}` and seeds
/// default button/heading props. Content is never removed or reordered.
#[tracing::instrument(skip_all, fields(screens = screens.len()))]
pub fn auto_fix(screens: &mut [Screen]) -> FixReport {
    let mut report = FixReport::default();
    let mut path = IssuePath::root();
    path.push_field("screens");
    for (si, screen) in screens.iter_mut().enumerate() {
        path.push_index(si);
        path.push_field("sections");
        for (i, section) in screen.sections_mut().iter_mut().enumerate() {
            path.push_index(i);
            let replacement = match &section.layout {
                Some(Loose::Valid(raw)) => {
                    let fixed = LayoutMode::parse(raw).unwrap_or(LayoutMode::Column).as_str();
                    (fixed != raw.as_str()).then(|| (format!("layout \"{raw}\" -> \"{fixed}\""), fixed))
                }
                Some(Loose::Invalid(raw)) => {
                    let fixed = LayoutMode::Column.as_str();
                    Some((format!("layout {raw} -> \"{fixed}\""), fixed))
                }
                None => None,
            };
            if let Some((description, fixed)) = replacement {
                report.record(&path.with_field("layout"), description);
                section.layout = Some(fixed.to_owned().into());
            }
            path.push_field("components");
            fix_nodes(section.components_mut().iter_mut(), &mut path, &mut report);
            path.pop();
            path.pop();
        }
        path.pop();
        path.pop();
    }
    if !report.is_empty() {
        tracing::debug!(fixes = report.len(), "auto-fix applied");
    }
    report
}

fn fix_nodes<'a>(
    nodes: impl Iterator<Item = &'a mut ComponentNode>,
    path: &mut IssuePath,
    report: &mut FixReport,
) {
    for (i, node) in nodes.enumerate() {
        path.push_index(i);
        fix_node(node, path, report);
        path.pop();
    }
}

fn fix_node(node: &mut ComponentNode, path: &mut IssuePath, report: &mut FixReport) {
    if let Some(raw) = node.kind_str()
        && let Some(canonical) = ComponentKind::canonical_name(raw)
        && canonical != raw
    {
        report.record(
            &path.with_field("type"),
            format!("type \"{raw}\" -> \"{canonical}\""),
        );
        node.kind = Some(canonical.to_owned().into());
    }

    match &node.props {
        None => {
            node.props = Some(PropsMap::new().into());
            report.record(&path.with_field("props"), "added empty props");
        }
        Some(Loose::Invalid(raw)) => {
            let description = format!("replaced non-object props {raw} with {{}}");
            node.props = Some(PropsMap::new().into());
            report.record(&path.with_field("props"), description);
        }
        Some(Loose::Valid(_)) => {}
    }

    let defaults: &[(&str, &str)] = match node.kind_str() {
        Some("button") => &[("variant", "primary"), ("size", "md")],
        Some("heading") => &[("size", "md")],
        _ => &[],
    };
    if let Some(props) = node.props.as_mut().and_then(Loose::valid_mut) {
        for (key, value) in defaults {
            if props.get(*key).is_none_or(|v| v.is_null()) {
                props.insert((*key).to_owned(), serde_json::Value::from(*value));
                let mut p = path.with_field("props");
                p.push_key(key);
                report.record(&p, format!("defaulted {key} to \"{value}\""));
            }
        }
    }

    path.push_field("children");
    fix_nodes(node.children_mut().iter_mut(), path, report);
    path.pop();
}

/// Run [`auto_fix`] and then [`validate`] on the repaired screens.
pub fn validate_and_fix(
    screens: &mut [Screen],
    design_system: Option<&DesignSystem>,
) -> (FixReport, ValidationResult) {
    let report = auto_fix(screens);
    let result = validate(screens, design_system);
    (report, result)
}

#[cfg(test)]
#[path = "../../tests/unit/schema/autofix.rs"]
mod tests;
