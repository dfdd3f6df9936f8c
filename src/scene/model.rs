use crate::tokens::design_system::DesignSystem;
use serde::{Deserialize, Serialize};

/// JSON object used for free-form component props.
pub type PropsMap = serde_json::Map<String, serde_json::Value>;

/// Boundary document: screens plus an optional embedded design system.
///
/// Every field is optional at the serde level. Upstream generators occasionally emit
/// incomplete trees; those still parse and the validator reports what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDef {
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_system: Option<DesignSystem>,
}

/// A field that keeps whatever JSON the generator produced.
///
/// Values of the expected shape land in `Valid`. Anything else is kept verbatim in
/// `Invalid` so one mistyped field never rejects the whole document; the validator
/// reports it and later stages treat it as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose<T> {
    Valid(T),
    Invalid(serde_json::Value),
}

impl<T> Loose<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid(_) => None,
        }
    }

    pub fn valid_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid(_) => None,
        }
    }

    /// The raw value when it had the wrong shape.
    pub fn invalid(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(raw) => Some(raw),
        }
    }
}

impl<T> From<T> for Loose<T> {
    fn from(v: T) -> Self {
        Self::Valid(v)
    }
}

fn valid_str(field: &Option<Loose<String>>) -> Option<&str> {
    field.as_ref().and_then(Loose::valid).map(String::as_str)
}

fn valid_slice<T>(field: &Option<Loose<Vec<T>>>) -> &[T] {
    field
        .as_ref()
        .and_then(Loose::valid)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn valid_slice_mut<T>(field: &mut Option<Loose<Vec<T>>>) -> &mut [T] {
    match field.as_mut().and_then(Loose::valid_mut) {
        Some(v) => v.as_mut_slice(),
        None => &mut [],
    }
}

fn invalid_of<T>(field: &Option<Loose<T>>) -> Option<&serde_json::Value> {
    field.as_ref().and_then(Loose::invalid)
}

/// One screen of the wireframe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Identity within the document (`screenName` is accepted as an alias).
    #[serde(default, alias = "screenName", skip_serializing_if = "Option::is_none")]
    pub name: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_type: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Loose<Vec<Section>>>,
}

impl Screen {
    /// Name or an empty string.
    pub fn name_str(&self) -> &str {
        valid_str(&self.name).unwrap_or("")
    }

    pub fn title_str(&self) -> Option<&str> {
        valid_str(&self.title)
    }

    /// Sections or an empty slice.
    pub fn sections(&self) -> &[Section] {
        valid_slice(&self.sections)
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        valid_slice_mut(&mut self.sections)
    }

    /// Mistyped scalar fields as `(json name, raw value)`, `name` and `sections` excluded.
    pub fn mistyped_fields(&self) -> Vec<(&'static str, &serde_json::Value)> {
        [
            ("title", invalid_of(&self.title)),
            ("description", invalid_of(&self.description)),
            ("screenType", invalid_of(&self.screen_type)),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

/// A horizontal band of a screen with its own layout mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width: Option<Loose<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Loose<String>>,
    /// Explicit grid column count for `grid` sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Loose<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Loose<Vec<ComponentNode>>>,
}

impl Section {
    pub fn name_str(&self) -> Option<&str> {
        valid_str(&self.name)
    }

    pub fn layout_str(&self) -> Option<&str> {
        valid_str(&self.layout)
    }

    pub fn padding_str(&self) -> Option<&str> {
        valid_str(&self.padding)
    }

    pub fn background_str(&self) -> Option<&str> {
        valid_str(&self.background)
    }

    /// Explicit column count. Integral numbers and numeric strings are accepted.
    pub fn column_count(&self) -> Option<u32> {
        match self.columns.as_ref()? {
            Loose::Valid(n) => Some(*n),
            Loose::Invalid(serde_json::Value::String(s)) => s.trim().parse().ok(),
            Loose::Invalid(serde_json::Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u32),
            Loose::Invalid(_) => None,
        }
    }

    /// Components or an empty slice.
    pub fn components(&self) -> &[ComponentNode] {
        valid_slice(&self.components)
    }

    pub fn components_mut(&mut self) -> &mut [ComponentNode] {
        valid_slice_mut(&mut self.components)
    }

    /// Parsed layout mode, `column` when absent or unrecognized.
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_str()
            .and_then(LayoutMode::parse)
            .unwrap_or_default()
    }

    /// Mistyped fields with no dedicated issue code, as `(json name, raw value)`.
    pub fn mistyped_fields(&self) -> Vec<(&'static str, &serde_json::Value)> {
        [
            ("name", invalid_of(&self.name)),
            ("fullWidth", invalid_of(&self.full_width)),
            ("columns", invalid_of(&self.columns)),
            ("components", invalid_of(&self.components)),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

/// Raw component node as produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Loose<PropsMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Loose<Vec<ComponentNode>>>,
}

impl ComponentNode {
    /// Type name when it is a string.
    pub fn kind_str(&self) -> Option<&str> {
        valid_str(&self.kind)
    }

    pub fn props(&self) -> Option<&PropsMap> {
        self.props.as_ref().and_then(Loose::valid)
    }

    /// Children or an empty slice.
    pub fn children(&self) -> &[ComponentNode] {
        valid_slice(&self.children)
    }

    pub fn children_mut(&mut self) -> &mut [ComponentNode] {
        valid_slice_mut(&mut self.children)
    }

    /// Label when it is a non-blank string.
    pub fn label_str(&self) -> Option<&str> {
        valid_str(&self.label).filter(|s| !s.trim().is_empty())
    }

    /// Mistyped fields with no dedicated issue code, as `(json name, raw value)`.
    pub fn mistyped_fields(&self) -> Vec<(&'static str, &serde_json::Value)> {
        [
            ("label", invalid_of(&self.label)),
            ("props", invalid_of(&self.props)),
            ("children", invalid_of(&self.children)),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

/// Section positioning strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    Row,
    #[default]
    Column,
    Grid,
    Stack,
    SidebarLeft,
    SidebarRight,
    Split,
}

impl LayoutMode {
    pub const ALLOWED: &'static [&'static str] = &[
        "row",
        "column",
        "grid",
        "stack",
        "sidebar-left",
        "sidebar-right",
        "split",
    ];

    /// Parse a layout name; `sidebarLeft`/`sidebar_left` spellings are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        match norm.as_str() {
            "row" => Some(Self::Row),
            "column" => Some(Self::Column),
            "grid" => Some(Self::Grid),
            "stack" => Some(Self::Stack),
            "sidebar-left" | "sidebarleft" => Some(Self::SidebarLeft),
            "sidebar-right" | "sidebarright" => Some(Self::SidebarRight),
            "split" => Some(Self::Split),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Grid => "grid",
            Self::Stack => "stack",
            Self::SidebarLeft => "sidebar-left",
            Self::SidebarRight => "sidebar-right",
            Self::Split => "split",
        }
    }
}

/// Semantic section padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSize {
    None,
    Sm,
    Md,
    Lg,
    Xl,
}

impl PaddingSize {
    pub const ALLOWED: &'static [&'static str] = &["none", "sm", "md", "lg", "xl"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    /// Padding in layout units.
    pub fn px(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Sm => 12.0,
            Self::Md => 24.0,
            Self::Lg => 32.0,
            Self::Xl => 48.0,
        }
    }
}
