use crate::schema::issue::{IssueCode, IssuePath, ValidationIssue, ValidationResult, ValidationStats};
use crate::tokens::color::{is_gradient, is_hex};
use crate::tokens::defaults::REQUIRED_COLOR_KEYS;
use crate::tokens::design_system::DesignSystem;

pub(crate) fn check_design_system(
    ds: &DesignSystem,
    base: &IssuePath,
    issues: &mut Vec<ValidationIssue>,
) {
    let palette_path = base.with_field("colorPalette");
    match ds.color_palette.as_ref().filter(|p| !p.is_empty()) {
        None => issues.push(
            ValidationIssue::at(
                &palette_path,
                IssueCode::EmptyColorPalette,
                "design system has no color palette",
            )
            .with_fix("define at least the required semantic colors"),
        ),
        Some(palette) => {
            for key in REQUIRED_COLOR_KEYS {
                if !palette.contains_key(key) {
                    let mut p = palette_path.clone();
                    p.push_key(key);
                    issues.push(ValidationIssue::at(
                        &p,
                        IssueCode::MissingColor,
                        format!("color palette is missing \"{key}\""),
                    ));
                }
            }
            for (key, value) in palette {
                let ok = value
                    .as_str()
                    .is_some_and(|s| is_hex(s) || is_gradient(s));
                if !ok {
                    let mut p = palette_path.clone();
                    p.push_key(key);
                    issues.push(ValidationIssue::at(
                        &p,
                        IssueCode::NonHexColor,
                        format!("color \"{key}\" = {value} is not a hex color or gradient"),
                    ));
                }
            }
        }
    }

    let typo_path = base.with_field("typography");
    let typography = ds.typography.as_ref();
    if typography.and_then(|t| t.font_family.as_ref()).is_none() {
        issues.push(ValidationIssue::at(
            &typo_path.with_field("fontFamily"),
            IssueCode::MissingTypography,
            "typography has no fontFamily",
        ));
    }
    if typography.and_then(|t| t.scale.as_ref()).is_none() {
        issues.push(ValidationIssue::at(
            &typo_path.with_field("scale"),
            IssueCode::MissingTypography,
            "typography has no scale",
        ));
    }

    let spacing_path = base.with_field("spacing");
    let spacing = ds.spacing.as_ref();
    if spacing.and_then(|s| s.unit).is_none() {
        issues.push(ValidationIssue::at(
            &spacing_path.with_field("unit"),
            IssueCode::MissingSpacing,
            "spacing has no unit",
        ));
    }
    if spacing.and_then(|s| s.scale.as_ref()).is_none() {
        issues.push(ValidationIssue::at(
            &spacing_path.with_field("scale"),
            IssueCode::MissingSpacing,
            "spacing has no scale",
        ));
    }
}

/// Validate a design system on its own. Paths are rooted at the design-system object.
pub fn validate_design_system(ds: &DesignSystem) -> ValidationResult {
    let mut issues = Vec::new();
    check_design_system(ds, &IssuePath::root(), &mut issues);
    ValidationResult::from_issues(issues, ValidationStats::default())
}

#[cfg(test)]
#[path = "../../tests/unit/schema/design_system.rs"]
mod tests;
