use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Issue severity. Only `Error` flips [`ValidationResult::valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Stable machine-readable issue codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    MissingScreenName,
    DuplicateScreenName,
    EmptySections,
    InvalidLayout,
    InvalidPadding,
    NonHexBackground,
    MissingType,
    UnknownComponentType,
    MaxDepthExceeded,
    InvalidPropValue,
    InvalidSliderRange,
    InvalidProgressValue,
    MissingLabel,
    PlaceholderContent,
    UnexpectedChildren,
    NoPrimaryHeading,
    ExcessiveCtas,
    NavTooManyItems,
    InputMissingLabel,
    EmptyColorPalette,
    MissingColor,
    NonHexColor,
    MissingTypography,
    MissingSpacing,
    /// A field holds a JSON value of the wrong shape and is ignored.
    InvalidFieldType,
}

impl IssueCode {
    /// Severity each code is always reported with.
    pub fn severity(self) -> Severity {
        use IssueCode::*;
        match self {
            MissingScreenName | EmptySections | MissingType | MaxDepthExceeded
            | EmptyColorPalette => Severity::Error,
            DuplicateScreenName | InvalidLayout | InvalidPadding | UnknownComponentType
            | InvalidPropValue | InvalidSliderRange | InvalidProgressValue | MissingLabel
            | PlaceholderContent | ExcessiveCtas | NavTooManyItems | InputMissingLabel
            | MissingColor | MissingTypography | MissingSpacing | InvalidFieldType => {
                Severity::Warning
            }
            NonHexBackground | UnexpectedChildren | NoPrimaryHeading | NonHexColor => {
                Severity::Info
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathElem {
    Field(&'static str),
    Index(usize),
    Key(String),
}

/// Walk position inside the document, rendered as `$.screens[0].sections[1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IssuePath(SmallVec<[PathElem; 12]>);

impl IssuePath {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn push_field(&mut self, name: &'static str) {
        self.0.push(PathElem::Field(name));
    }

    pub(crate) fn push_index(&mut self, i: usize) {
        self.0.push(PathElem::Index(i));
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.0.push(PathElem::Key(key.to_owned()));
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    /// Copy of this path with `field` appended.
    pub(crate) fn with_field(&self, name: &'static str) -> Self {
        let mut p = self.clone();
        p.push_field(name);
        p
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.0 {
            match p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
                PathElem::Key(k) => write!(f, ".{k}")?,
            }
        }
        Ok(())
    }
}

/// One finding of the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// JSON-path-like location, e.g. `$.screens[0].sections[1].components[2]`.
    pub path: String,
    pub code: IssueCode,
    pub message: String,
    /// Suggested remedy, when one is obvious.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl ValidationIssue {
    pub(crate) fn at(path: &IssuePath, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            path: path.to_string(),
            code,
            message: message.into(),
            fix: None,
        }
    }

    pub(crate) fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{sev} {}: {}", self.path, self.message)
    }
}

/// Document-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub screens: usize,
    pub sections: usize,
    pub components: usize,
    pub max_depth: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

/// Validator output. Advisory: callers decide whether errors block anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub stats: ValidationStats,
}

impl ValidationResult {
    pub(crate) fn from_issues(issues: Vec<ValidationIssue>, mut stats: ValidationStats) -> Self {
        stats.errors = count_severity(&issues, Severity::Error);
        stats.warnings = count_severity(&issues, Severity::Warning);
        stats.infos = count_severity(&issues, Severity::Info);
        Self {
            valid: stats.errors == 0,
            issues,
            stats,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Number of issues with `code`.
    pub fn count(&self, code: IssueCode) -> usize {
        self.issues.iter().filter(|i| i.code == code).count()
    }

    pub fn has(&self, code: IssueCode) -> bool {
        self.count(code) > 0
    }
}

fn count_severity(issues: &[ValidationIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
#[path = "../../tests/unit/schema/issue.rs"]
mod tests;
