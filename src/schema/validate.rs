use crate::scene::component::{
    AlertVariant, Align, AspectRatio, AvatarSize, BadgeVariant, ButtonVariant, CardVariant,
    ChartType, ComponentKind, HeadingSize, InputType, MediaSize, NavVariant, PropValue,
    SidebarVariant, Size3, SpacerSize, TextVariant, Trend, WidthToken, number_prop,
};
use crate::scene::model::{ComponentNode, LayoutMode, Loose, PaddingSize, PropsMap, Screen, Section};
use crate::schema::design_system::check_design_system;
use crate::schema::issue::{IssueCode, IssuePath, ValidationIssue, ValidationResult, ValidationStats};
use crate::tokens::color::is_hex;
use crate::tokens::design_system::DesignSystem;
use std::collections::HashSet;

/// Deepest allowed component nesting; top-level section components sit at depth 1.
pub const MAX_DEPTH: usize = 8;

/// Primary buttons tolerated per screen before `EXCESSIVE_CTAS`.
const MAX_PRIMARY_CTAS: usize = 3;

/// Nav entries tolerated before `NAV_TOO_MANY_ITEMS`.
const MAX_NAV_ITEMS: usize = 6;

const PLACEHOLDER_MARKERS: &[&str] = &["lorem ipsum", "dolor sit amet", "consectetur adipiscing"];

/// Enumerated props checked for each kind.
fn enum_rules(kind: &ComponentKind) -> &'static [(&'static str, &'static [&'static str])] {
    use ComponentKind as K;
    match kind {
        K::Button => &[
            ("variant", ButtonVariant::ALLOWED),
            ("size", Size3::ALLOWED),
        ],
        K::Heading => &[("size", HeadingSize::ALLOWED)],
        K::Text => &[("size", Size3::ALLOWED), ("variant", TextVariant::ALLOWED)],
        K::Input | K::Textarea | K::SearchBar | K::DatePicker => {
            &[("inputType", InputType::ALLOWED)]
        }
        K::Badge => &[("variant", BadgeVariant::ALLOWED)],
        K::Alert => &[("variant", AlertVariant::ALLOWED)],
        K::Card => &[("variant", CardVariant::ALLOWED)],
        K::Nav => &[("variant", NavVariant::ALLOWED)],
        K::Sidebar => &[("variant", SidebarVariant::ALLOWED)],
        K::Image => &[
            ("size", MediaSize::ALLOWED),
            ("aspectRatio", AspectRatio::ALLOWED),
        ],
        K::Avatar => &[("size", AvatarSize::ALLOWED)],
        K::Video => &[("height", Size3::ALLOWED)],
        K::Chart => &[("chartType", ChartType::ALLOWED), ("height", Size3::ALLOWED)],
        K::Icon => &[("size", Size3::ALLOWED)],
        K::Spacer => &[("size", SpacerSize::ALLOWED)],
        K::Stat => &[("trend", Trend::ALLOWED)],
        _ => &[],
    }
}

const COMMON_RULES: &[(&str, &[&str])] = &[("width", WidthToken::ALLOWED), ("align", Align::ALLOWED)];

/// Component count and deepest depth of one subtree.
#[derive(Debug, Clone, Copy, Default)]
struct SubtreeStats {
    components: usize,
    max_depth: usize,
}

impl SubtreeStats {
    fn absorb(&mut self, other: SubtreeStats) {
        self.components += other.components;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

struct Validator {
    issues: Vec<ValidationIssue>,
    path: IssuePath,
}

impl Validator {
    fn report(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues
            .push(ValidationIssue::at(&self.path, code, message));
    }

    fn report_fix(&mut self, code: IssueCode, message: impl Into<String>, fix: impl Into<String>) {
        self.issues
            .push(ValidationIssue::at(&self.path, code, message).with_fix(fix));
    }

    fn in_field<R>(&mut self, name: &'static str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_field(name);
        let r = f(self);
        self.path.pop();
        r
    }

    fn in_index<R>(&mut self, i: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_index(i);
        let r = f(self);
        self.path.pop();
        r
    }

    /// `INVALID_FIELD_TYPE` for each mistyped field under the current path.
    fn mistyped(&mut self, fields: Vec<(&'static str, &serde_json::Value)>) {
        for (key, raw) in fields {
            self.in_field(key, |v| {
                v.report(
                    IssueCode::InvalidFieldType,
                    format!("{key} is {}; ignored", describe_json(raw)),
                )
            });
        }
    }

    fn screen(&mut self, screen: &Screen, seen: &mut HashSet<String>) -> (usize, SubtreeStats) {
        let name = screen.name_str().trim();
        if let Some(raw) = screen.name.as_ref().and_then(Loose::invalid) {
            self.in_field("name", |v| {
                v.report_fix(
                    IssueCode::MissingScreenName,
                    format!("screen name is {}, not a string", describe_json(raw)),
                    "give every screen a unique name",
                )
            });
        } else if name.is_empty() {
            self.in_field("name", |v| {
                v.report_fix(
                    IssueCode::MissingScreenName,
                    "screen has no name",
                    "give every screen a unique name",
                )
            });
        } else if !seen.insert(name.to_owned()) {
            self.in_field("name", |v| {
                v.report(
                    IssueCode::DuplicateScreenName,
                    format!("screen name \"{name}\" is used more than once"),
                )
            });
        }

        self.mistyped(screen.mistyped_fields());

        let sections = screen.sections();
        if sections.is_empty() {
            let message = match screen.sections.as_ref().and_then(Loose::invalid) {
                Some(raw) => format!("sections is {}, not an array", describe_json(raw)),
                None => "screen has no sections".to_owned(),
            };
            self.in_field("sections", |v| v.report(IssueCode::EmptySections, message));
            return (0, SubtreeStats::default());
        }

        let mut stats = SubtreeStats::default();
        self.in_field("sections", |v| {
            for (i, section) in sections.iter().enumerate() {
                let sub = v.in_index(i, |v| v.section(section));
                stats.absorb(sub);
            }
        });
        self.screen_heuristics(screen);
        (sections.len(), stats)
    }

    fn section(&mut self, section: &Section) -> SubtreeStats {
        if let Some(raw) = section.layout.as_ref().and_then(Loose::invalid) {
            self.in_field("layout", |v| {
                v.report_fix(
                    IssueCode::InvalidLayout,
                    format!("layout is {}, not a string", describe_json(raw)),
                    "use \"column\"",
                )
            });
        }
        if let Some(raw) = section.padding.as_ref().and_then(Loose::invalid) {
            self.in_field("padding", |v| {
                v.report(
                    IssueCode::InvalidPadding,
                    format!(
                        "padding is {} (expected one of {})",
                        describe_json(raw),
                        PaddingSize::ALLOWED.join(", ")
                    ),
                )
            });
        }
        if let Some(raw) = section.background.as_ref().and_then(Loose::invalid) {
            self.in_field("background", |v| {
                v.report(
                    IssueCode::NonHexBackground,
                    format!("background is {}, not a color string", describe_json(raw)),
                )
            });
        }
        for (key, raw) in section.mistyped_fields() {
            match section.column_count() {
                Some(n) if key == "columns" => self.in_field(key, |v| {
                    v.report(
                        IssueCode::InvalidFieldType,
                        format!("columns is {}; using {n}", describe_json(raw)),
                    )
                }),
                _ => self.mistyped(vec![(key, raw)]),
            }
        }

        if let Some(layout) = section.layout_str()
            && LayoutMode::parse(layout).is_none()
        {
            self.in_field("layout", |v| {
                v.report_fix(
                    IssueCode::InvalidLayout,
                    format!(
                        "unknown layout \"{layout}\" (expected one of {})",
                        LayoutMode::ALLOWED.join(", ")
                    ),
                    "use \"column\"",
                )
            });
        }
        if let Some(padding) = section.padding_str()
            && PaddingSize::parse(padding).is_none()
        {
            self.in_field("padding", |v| {
                v.report(
                    IssueCode::InvalidPadding,
                    format!(
                        "unknown padding \"{padding}\" (expected one of {})",
                        PaddingSize::ALLOWED.join(", ")
                    ),
                )
            });
        }
        if let Some(bg) = section.background_str()
            && bg.trim() != "gradient"
            && !is_hex(bg)
        {
            self.in_field("background", |v| {
                v.report(
                    IssueCode::NonHexBackground,
                    format!("background \"{bg}\" is not a hex color or \"gradient\""),
                )
            });
        }

        let mut stats = SubtreeStats::default();
        self.in_field("components", |v| {
            for (i, node) in section.components().iter().enumerate() {
                let sub = v.in_index(i, |v| v.component(node, 1));
                stats.absorb(sub);
            }
        });
        stats
    }

    fn component(&mut self, node: &ComponentNode, depth: usize) -> SubtreeStats {
        let mut stats = SubtreeStats {
            components: 1,
            max_depth: depth,
        };
        if depth > MAX_DEPTH {
            self.report(
                IssueCode::MaxDepthExceeded,
                format!("component nesting exceeds the maximum depth of {MAX_DEPTH}"),
            );
            return stats;
        }

        self.mistyped(node.mistyped_fields());

        let kind = match node.kind.as_ref() {
            Some(Loose::Invalid(raw)) => {
                self.in_field("type", |v| {
                    v.report(
                        IssueCode::MissingType,
                        format!("type is {}, not a string", describe_json(raw)),
                    )
                });
                None
            }
            Some(Loose::Valid(raw)) if !raw.trim().is_empty() => {
                let raw = raw.trim();
                let kind = ComponentKind::from_type_name(raw);
                if !kind.is_known() {
                    self.in_field("type", |v| {
                        v.report(
                            IssueCode::UnknownComponentType,
                            format!("unknown component type \"{raw}\""),
                        )
                    });
                }
                Some(kind)
            }
            _ => {
                self.in_field("type", |v| {
                    v.report(IssueCode::MissingType, "component has no type")
                });
                None
            }
        };

        if let Some(kind) = &kind {
            let empty = PropsMap::new();
            let props = node.props().unwrap_or(&empty);
            self.props(kind, props);

            match node.label_str() {
                None if kind.requires_label() => self.in_field("label", |v| {
                    v.report(
                        IssueCode::MissingLabel,
                        format!("{} has no label", kind.as_str()),
                    )
                }),
                Some(label) if is_placeholder(label) => self.in_field("label", |v| {
                    v.report(
                        IssueCode::PlaceholderContent,
                        "label looks like placeholder text",
                    )
                }),
                _ => {}
            }

            if !node.children().is_empty() && kind.is_known() && !kind.is_container() {
                self.in_field("children", |v| {
                    v.report(
                        IssueCode::UnexpectedChildren,
                        format!("{} is not a container but has children", kind.as_str()),
                    )
                });
            }
        }

        self.in_field("children", |v| {
            for (i, child) in node.children().iter().enumerate() {
                let sub = v.in_index(i, |v| v.component(child, depth + 1));
                stats.absorb(sub);
            }
        });
        stats
    }

    fn props(&mut self, kind: &ComponentKind, props: &PropsMap) {
        if props.is_empty() {
            return;
        }
        self.in_field("props", |v| {
            for (key, allowed) in enum_rules(kind).iter().chain(COMMON_RULES) {
                let Some(value) = props.get(*key) else {
                    continue;
                };
                if value.is_null() {
                    continue;
                }
                let ok = value.as_str().is_some_and(|s| allowed.contains(&s));
                if !ok {
                    v.in_field(key, |v| {
                        v.report(
                            IssueCode::InvalidPropValue,
                            format!(
                                "{}.{key} = {value} is not one of {}",
                                kind.as_str(),
                                allowed.join(", ")
                            ),
                        )
                    });
                }
            }

            match kind {
                ComponentKind::Slider => v.slider(props),
                ComponentKind::ProgressBar => v.progress(props),
                _ => {}
            }
        });
    }

    fn numeric(&mut self, props: &PropsMap, key: &'static str) -> Option<f64> {
        match number_prop(props, key) {
            PropValue::Valid(n) => Some(n),
            PropValue::Absent => None,
            PropValue::Invalid(raw) => {
                self.in_field(key, |v| {
                    v.report(
                        IssueCode::InvalidPropValue,
                        format!("{key} = {raw} is not a number"),
                    )
                });
                None
            }
        }
    }

    fn slider(&mut self, props: &PropsMap) {
        let min = self.numeric(props, "min");
        let max = self.numeric(props, "max");
        self.numeric(props, "value");
        if let (Some(min), Some(max)) = (min, max)
            && min >= max
        {
            self.report_fix(
                IssueCode::InvalidSliderRange,
                format!("slider min ({min}) must be less than max ({max})"),
                "swap min and max",
            );
        }
    }

    fn progress(&mut self, props: &PropsMap) {
        if let Some(value) = self.numeric(props, "value")
            && !(0.0..=100.0).contains(&value)
        {
            self.in_field("value", |v| {
                v.report_fix(
                    IssueCode::InvalidProgressValue,
                    format!("progress value {value} is outside 0..=100"),
                    "clamp the value to 0..=100",
                )
            });
        }
    }

    /// UX lints over the screen's flattened component list.
    fn screen_heuristics(&mut self, screen: &Screen) {
        let mut flat = Vec::new();
        for (si, section) in screen.sections().iter().enumerate() {
            let mut path = self.path.clone();
            path.push_field("sections");
            path.push_index(si);
            path.push_field("components");
            flatten(section.components(), &mut path, 1, &mut flat);
        }
        if flat.is_empty() {
            return;
        }

        let mut has_primary_heading = false;
        let mut primary_ctas = 0usize;
        for (path, node) in &flat {
            let kind = node_kind(node);
            let props = node.props();
            let prop_str = |key: &str| props.and_then(|p| p.get(key)).and_then(|v| v.as_str());
            match kind {
                ComponentKind::Heading => {
                    has_primary_heading |= matches!(prop_str("size"), Some("xl" | "display"));
                }
                ComponentKind::Button => {
                    if prop_str("variant") == Some("primary") {
                        primary_ctas += 1;
                    }
                }
                ComponentKind::Nav => {
                    let declared = props
                        .and_then(|p| p.get("items"))
                        .and_then(|v| v.as_array())
                        .map_or(0, Vec::len);
                    let linked = node
                        .children()
                        .iter()
                        .filter(|c| {
                            matches!(node_kind(c), ComponentKind::Link | ComponentKind::Button)
                        })
                        .count();
                    let total = declared + linked;
                    if total > MAX_NAV_ITEMS {
                        self.issues.push(ValidationIssue::at(
                            path,
                            IssueCode::NavTooManyItems,
                            format!("nav has {total} items (more than {MAX_NAV_ITEMS})"),
                        ));
                    }
                }
                ComponentKind::Input | ComponentKind::Select if node.label_str().is_none() => {
                    self.issues.push(
                        ValidationIssue::at(
                            path,
                            IssueCode::InputMissingLabel,
                            format!("{} has no accessible label", kind.as_str()),
                        )
                        .with_fix("add a label describing the field"),
                    );
                }
                _ => {}
            }
        }

        if !has_primary_heading {
            self.report(
                IssueCode::NoPrimaryHeading,
                "screen has no heading with size xl or display",
            );
        }
        if primary_ctas > MAX_PRIMARY_CTAS {
            self.report(
                IssueCode::ExcessiveCtas,
                format!("screen has {primary_ctas} primary buttons (more than {MAX_PRIMARY_CTAS})"),
            );
        }
    }
}

fn node_kind(node: &ComponentNode) -> ComponentKind {
    node.kind_str()
        .map(ComponentKind::from_type_name)
        .unwrap_or_else(|| ComponentKind::Unknown(String::new()))
}

/// Pre-order flattening bounded by [`MAX_DEPTH`].
fn flatten<'a>(
    nodes: &'a [ComponentNode],
    path: &mut IssuePath,
    depth: usize,
    out: &mut Vec<(IssuePath, &'a ComponentNode)>,
) {
    if depth > MAX_DEPTH {
        return;
    }
    for (i, node) in nodes.iter().enumerate() {
        path.push_index(i);
        out.push((path.clone(), node));
        path.push_field("children");
        flatten(node.children(), path, depth + 1, out);
        path.pop();
        path.pop();
    }
}

/// Short description of a JSON value for issue messages.
fn describe_json(raw: &serde_json::Value) -> String {
    use serde_json::Value;
    match raw {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("the boolean {b}"),
        Value::Number(n) => format!("the number {n}"),
        Value::String(s) => format!("the string \"{s}\""),
        Value::Array(_) => "an array".to_owned(),
        Value::Object(_) => "an object".to_owned(),
    }
}

fn is_placeholder(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
}

/// Validate screens and, when supplied, a design system.
///
/// Never fails: every defect becomes a [`ValidationIssue`].
#[tracing::instrument(skip_all, fields(screens = screens.len()))]
pub fn validate(screens: &[Screen], design_system: Option<&DesignSystem>) -> ValidationResult {
    let mut v = Validator {
        issues: Vec::new(),
        path: IssuePath::root(),
    };
    let mut stats = ValidationStats {
        screens: screens.len(),
        ..ValidationStats::default()
    };
    let mut seen = HashSet::new();
    v.in_field("screens", |v| {
        for (i, screen) in screens.iter().enumerate() {
            let (sections, sub) = v.in_index(i, |v| v.screen(screen, &mut seen));
            stats.sections += sections;
            stats.components += sub.components;
            stats.max_depth = stats.max_depth.max(sub.max_depth);
        }
    });

    if let Some(ds) = design_system {
        let base = IssuePath::root().with_field("designSystem");
        check_design_system(ds, &base, &mut v.issues);
    }

    let result = ValidationResult::from_issues(v.issues, stats);
    tracing::debug!(
        errors = result.stats.errors,
        warnings = result.stats.warnings,
        infos = result.stats.infos,
        components = result.stats.components,
        "validated document"
    );
    result
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
