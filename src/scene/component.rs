use crate::scene::model::{ComponentNode, PropsMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Closed set of component kinds, plus a forward-compatible `Unknown` arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    // Containers.
    Nav,
    Sidebar,
    Footer,
    Form,
    Card,
    List,
    Tab,
    Accordion,
    Hero,
    Pricing,
    Testimonial,
    Timeline,
    // Text.
    Heading,
    Text,
    Link,
    Badge,
    Alert,
    Breadcrumb,
    Stat,
    // Inputs.
    Button,
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Toggle,
    Slider,
    SearchBar,
    DatePicker,
    // Media.
    Image,
    Avatar,
    Video,
    Chart,
    Icon,
    Map,
    // Composite.
    Table,
    ProgressBar,
    Stepper,
    Pagination,
    Divider,
    Spacer,
    Modal,
    /// Type name outside the closed set, kept verbatim.
    Unknown(String),
}

impl ComponentKind {
    /// Every known kind.
    pub const KNOWN: [ComponentKind; 42] = [
        Self::Nav,
        Self::Sidebar,
        Self::Footer,
        Self::Form,
        Self::Card,
        Self::List,
        Self::Tab,
        Self::Accordion,
        Self::Hero,
        Self::Pricing,
        Self::Testimonial,
        Self::Timeline,
        Self::Heading,
        Self::Text,
        Self::Link,
        Self::Badge,
        Self::Alert,
        Self::Breadcrumb,
        Self::Stat,
        Self::Button,
        Self::Input,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Toggle,
        Self::Slider,
        Self::SearchBar,
        Self::DatePicker,
        Self::Image,
        Self::Avatar,
        Self::Video,
        Self::Chart,
        Self::Icon,
        Self::Map,
        Self::Table,
        Self::ProgressBar,
        Self::Stepper,
        Self::Pagination,
        Self::Divider,
        Self::Spacer,
        Self::Modal,
    ];

    /// Canonical camelCase type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown(s) => s.as_str(),
            known => known_name(known),
        }
    }

    /// Resolve a type name, accepting kebab-case, snake_case and case variations of the
    /// canonical names (`search-bar`, `Search_Bar` → `searchBar`).
    pub fn from_type_name(raw: &str) -> Self {
        let folded = fold_type_name(raw);
        Self::KNOWN
            .iter()
            .find(|k| fold_type_name(k.as_str()) == folded)
            .cloned()
            .unwrap_or_else(|| Self::Unknown(raw.to_owned()))
    }

    /// Canonical name for an alias, `None` when the name is not a known kind.
    pub fn canonical_name(raw: &str) -> Option<&'static str> {
        let folded = fold_type_name(raw);
        Self::KNOWN
            .iter()
            .map(known_name)
            .find(|name| fold_type_name(name) == folded)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Kinds expected to own children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Nav
                | Self::Sidebar
                | Self::Footer
                | Self::Form
                | Self::Card
                | Self::List
                | Self::Tab
                | Self::Accordion
                | Self::Hero
                | Self::Pricing
                | Self::Testimonial
                | Self::Timeline
        )
    }

    /// Interactive and display kinds that should carry a `label`.
    pub fn requires_label(&self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Input
                | Self::Select
                | Self::Heading
                | Self::Text
                | Self::Link
                | Self::Checkbox
                | Self::Toggle
                | Self::SearchBar
                | Self::Image
        )
    }

    /// Kinds whose label is drawn above the field.
    pub fn is_field(&self) -> bool {
        matches!(
            self,
            Self::Input | Self::Textarea | Self::Select | Self::SearchBar | Self::DatePicker
        )
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

fn known_name(k: &ComponentKind) -> &'static str {
    match k {
        ComponentKind::Nav => "nav",
        ComponentKind::Sidebar => "sidebar",
        ComponentKind::Footer => "footer",
        ComponentKind::Form => "form",
        ComponentKind::Card => "card",
        ComponentKind::List => "list",
        ComponentKind::Tab => "tab",
        ComponentKind::Accordion => "accordion",
        ComponentKind::Hero => "hero",
        ComponentKind::Pricing => "pricing",
        ComponentKind::Testimonial => "testimonial",
        ComponentKind::Timeline => "timeline",
        ComponentKind::Heading => "heading",
        ComponentKind::Text => "text",
        ComponentKind::Link => "link",
        ComponentKind::Badge => "badge",
        ComponentKind::Alert => "alert",
        ComponentKind::Breadcrumb => "breadcrumb",
        ComponentKind::Stat => "stat",
        ComponentKind::Button => "button",
        ComponentKind::Input => "input",
        ComponentKind::Textarea => "textarea",
        ComponentKind::Select => "select",
        ComponentKind::Checkbox => "checkbox",
        ComponentKind::Radio => "radio",
        ComponentKind::Toggle => "toggle",
        ComponentKind::Slider => "slider",
        ComponentKind::SearchBar => "searchBar",
        ComponentKind::DatePicker => "datePicker",
        ComponentKind::Image => "image",
        ComponentKind::Avatar => "avatar",
        ComponentKind::Video => "video",
        ComponentKind::Chart => "chart",
        ComponentKind::Icon => "icon",
        ComponentKind::Map => "map",
        ComponentKind::Table => "table",
        ComponentKind::ProgressBar => "progressBar",
        ComponentKind::Stepper => "stepper",
        ComponentKind::Pagination => "pagination",
        ComponentKind::Divider => "divider",
        ComponentKind::Spacer => "spacer",
        ComponentKind::Modal => "modal",
        ComponentKind::Unknown(_) => "",
    }
}

fn fold_type_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ----------------------------------------------------------------------------
// Prop enums
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub const ALLOWED: &'static [&'static str] =
        &["primary", "secondary", "outline", "ghost", "danger"];
}

/// Three-step size used by buttons, body text, icons and media heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size3 {
    Sm,
    Md,
    Lg,
}

impl Size3 {
    pub const ALLOWED: &'static [&'static str] = &["sm", "md", "lg"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingSize {
    Sm,
    Md,
    Lg,
    Xl,
    Display,
}

impl HeadingSize {
    pub const ALLOWED: &'static [&'static str] = &["sm", "md", "lg", "xl", "display"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Default,
    Muted,
    Caption,
}

impl TextVariant {
    pub const ALLOWED: &'static [&'static str] = &["default", "muted", "caption"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Date,
    Search,
}

impl InputType {
    pub const ALLOWED: &'static [&'static str] = &[
        "text", "email", "password", "number", "tel", "url", "date", "search",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    pub const ALLOWED: &'static [&'static str] =
        &["default", "primary", "success", "warning", "error", "info"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertVariant {
    pub const ALLOWED: &'static [&'static str] = &["info", "success", "warning", "error"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Default,
    Elevated,
    Outlined,
    Filled,
}

impl CardVariant {
    pub const ALLOWED: &'static [&'static str] = &["default", "elevated", "outlined", "filled"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    Default,
    Transparent,
    Dark,
}

impl NavVariant {
    pub const ALLOWED: &'static [&'static str] = &["default", "transparent", "dark"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarVariant {
    Default,
    Dark,
    Minimal,
}

impl SidebarVariant {
    pub const ALLOWED: &'static [&'static str] = &["default", "dark", "minimal"];
}

/// Image size, `full` spans the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSize {
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl MediaSize {
    pub const ALLOWED: &'static [&'static str] = &["sm", "md", "lg", "xl", "full"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    pub const ALLOWED: &'static [&'static str] = &["xs", "sm", "md", "lg", "xl"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl SpacerSize {
    pub const ALLOWED: &'static [&'static str] = &["sm", "md", "lg", "xl"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "3:2")]
    Photo,
}

impl AspectRatio {
    pub const ALLOWED: &'static [&'static str] = &["1:1", "4:3", "16:9", "3:2"];

    /// Height divided by width.
    pub fn height_over_width(self) -> f64 {
        match self {
            Self::Square => 1.0,
            Self::Standard => 3.0 / 4.0,
            Self::Wide => 9.0 / 16.0,
            Self::Photo => 2.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
    Donut,
}

impl ChartType {
    pub const ALLOWED: &'static [&'static str] = &["bar", "line", "pie", "area", "donut"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub const ALLOWED: &'static [&'static str] = &["up", "down", "flat"];
}

/// Fractional width applied after type dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidthToken {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/3")]
    Third,
    #[serde(rename = "2/3")]
    TwoThirds,
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "3/4")]
    ThreeQuarters,
    #[serde(rename = "auto")]
    Auto,
}

impl WidthToken {
    pub const ALLOWED: &'static [&'static str] = &["full", "1/2", "1/3", "2/3", "1/4", "3/4", "auto"];

    /// Percentage of the available width, `None` for `auto`.
    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Full => Some(100.0),
            Self::Half => Some(50.0),
            Self::Third => Some(100.0 / 3.0),
            Self::TwoThirds => Some(200.0 / 3.0),
            Self::Quarter => Some(25.0),
            Self::ThreeQuarters => Some(75.0),
            Self::Auto => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub const ALLOWED: &'static [&'static str] = &["left", "center", "right"];
}

// ----------------------------------------------------------------------------
// Prop lookup
// ----------------------------------------------------------------------------

/// Outcome of reading one prop.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue<T> {
    Absent,
    Valid(T),
    /// Present but not a member of the expected set; carries the raw JSON text.
    Invalid(String),
}

impl<T> PropValue<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(v),
            _ => None,
        }
    }
}

/// Read an enum prop through its serde representation.
pub fn enum_prop<T: DeserializeOwned>(props: &PropsMap, key: &str) -> PropValue<T> {
    match props.get(key) {
        None | Some(serde_json::Value::Null) => PropValue::Absent,
        Some(v) => match serde_json::from_value::<T>(v.clone()) {
            Ok(t) => PropValue::Valid(t),
            Err(_) => PropValue::Invalid(v.to_string()),
        },
    }
}

/// Read a numeric prop; numeric strings are accepted.
pub fn number_prop(props: &PropsMap, key: &str) -> PropValue<f64> {
    match props.get(key) {
        None | Some(serde_json::Value::Null) => PropValue::Absent,
        Some(serde_json::Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => PropValue::Valid(v),
            _ => PropValue::Invalid(n.to_string()),
        },
        Some(serde_json::Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => PropValue::Valid(v),
            _ => PropValue::Invalid(format!("\"{s}\"")),
        },
        Some(other) => PropValue::Invalid(other.to_string()),
    }
}

pub fn string_prop(props: &PropsMap, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Read a list of display strings. Objects contribute their `label`, `name`, `text` or
/// `title` field.
pub fn items_prop(props: &PropsMap, key: &str) -> Vec<String> {
    let Some(serde_json::Value::Array(arr)) = props.get(key) else {
        return Vec::new();
    };
    arr.iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Object(o) => ["label", "name", "text", "title"]
                .iter()
                .find_map(|k| o.get(*k).and_then(|x| x.as_str()))
                .map(str::to_owned),
            _ => None,
        })
        .collect()
}

fn usize_prop(props: &PropsMap, key: &str) -> Option<usize> {
    number_prop(props, key)
        .ok()
        .filter(|v| *v >= 0.0)
        .map(|v| v.floor() as usize)
}

// ----------------------------------------------------------------------------
// Typed props
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonProps {
    pub variant: Option<ButtonVariant>,
    pub size: Option<Size3>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingProps {
    pub size: Option<HeadingSize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    pub size: Option<Size3>,
    pub variant: Option<TextVariant>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputProps {
    pub input_type: Option<InputType>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectProps {
    pub options: Vec<String>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavProps {
    pub variant: Option<NavVariant>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarProps {
    pub variant: Option<SidebarVariant>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsProps {
    pub items: Vec<String>,
    pub active: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageProps {
    pub size: Option<MediaSize>,
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartProps {
    pub chart_type: Option<ChartType>,
    pub height: Option<Size3>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub name: Option<String>,
    pub size: Option<Size3>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderProps {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepperProps {
    pub steps: Vec<String>,
    pub current: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationProps {
    pub total: Option<usize>,
    pub current: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableProps {
    pub columns: Vec<String>,
    pub rows: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatProps {
    pub value: Option<String>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,
}

/// Kind-specific props, selected by the component kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Props {
    Button(ButtonProps),
    Heading(HeadingProps),
    Text(TextProps),
    Input(InputProps),
    Select(SelectProps),
    Badge(Option<BadgeVariant>),
    Alert(Option<AlertVariant>),
    Card(Option<CardVariant>),
    Nav(NavProps),
    Sidebar(SidebarProps),
    Items(ItemsProps),
    Image(ImageProps),
    Avatar(Option<AvatarSize>),
    Video(Option<Size3>),
    Chart(ChartProps),
    Icon(IconProps),
    Slider(SliderProps),
    Progress(Option<f64>),
    Stepper(StepperProps),
    Pagination(PaginationProps),
    Spacer(Option<SpacerSize>),
    Table(TableProps),
    Stat(StatProps),
    Toggle(ToggleProps),
    /// Kinds without specific props.
    None,
}

impl Props {
    /// Build the typed props for `kind`. Unrecognized values become `None` so styling falls
    /// back to the default arm; the validator reports them separately.
    pub fn parse(kind: &ComponentKind, p: &PropsMap) -> Self {
        use ComponentKind as K;
        match kind {
            K::Button => Self::Button(ButtonProps {
                variant: enum_prop(p, "variant").ok(),
                size: enum_prop(p, "size").ok(),
                icon: string_prop(p, "icon"),
            }),
            K::Heading => Self::Heading(HeadingProps {
                size: enum_prop(p, "size").ok(),
            }),
            K::Text => Self::Text(TextProps {
                size: enum_prop(p, "size").ok(),
                variant: enum_prop(p, "variant").ok(),
            }),
            K::Input | K::Textarea | K::SearchBar | K::DatePicker => Self::Input(InputProps {
                input_type: enum_prop(p, "inputType").ok(),
                placeholder: string_prop(p, "placeholder"),
            }),
            K::Select => Self::Select(SelectProps {
                options: items_prop(p, "options"),
                placeholder: string_prop(p, "placeholder"),
            }),
            K::Badge => Self::Badge(enum_prop(p, "variant").ok()),
            K::Alert => Self::Alert(enum_prop(p, "variant").ok()),
            K::Card => Self::Card(enum_prop(p, "variant").ok()),
            K::Nav => Self::Nav(NavProps {
                variant: enum_prop(p, "variant").ok(),
                items: items_prop(p, "items"),
            }),
            K::Sidebar => Self::Sidebar(SidebarProps {
                variant: enum_prop(p, "variant").ok(),
                items: items_prop(p, "items"),
            }),
            K::List | K::Tab | K::Breadcrumb => Self::Items(ItemsProps {
                items: items_prop(p, "items"),
                active: usize_prop(p, "active"),
            }),
            K::Image => Self::Image(ImageProps {
                size: enum_prop(p, "size").ok(),
                aspect_ratio: enum_prop(p, "aspectRatio").ok(),
            }),
            K::Avatar => Self::Avatar(enum_prop(p, "size").ok()),
            K::Video => Self::Video(enum_prop(p, "height").ok()),
            K::Chart => Self::Chart(ChartProps {
                chart_type: enum_prop(p, "chartType").ok(),
                height: enum_prop(p, "height").ok(),
            }),
            K::Icon => Self::Icon(IconProps {
                name: string_prop(p, "name"),
                size: enum_prop(p, "size").ok(),
            }),
            K::Slider => Self::Slider(SliderProps {
                min: number_prop(p, "min").ok(),
                max: number_prop(p, "max").ok(),
                value: number_prop(p, "value").ok(),
            }),
            K::ProgressBar => Self::Progress(number_prop(p, "value").ok()),
            K::Stepper => {
                let steps = match p.get("steps") {
                    Some(serde_json::Value::Array(_)) => items_prop(p, "steps"),
                    _ => {
                        let n = usize_prop(p, "steps").unwrap_or(3).min(12);
                        (1..=n).map(|i| format!("Step {i}")).collect()
                    }
                };
                Self::Stepper(StepperProps {
                    steps,
                    current: usize_prop(p, "current"),
                })
            }
            K::Pagination => Self::Pagination(PaginationProps {
                total: usize_prop(p, "total"),
                current: usize_prop(p, "current"),
            }),
            K::Spacer => Self::Spacer(enum_prop(p, "size").ok()),
            K::Table => Self::Table(TableProps {
                columns: items_prop(p, "columns"),
                rows: usize_prop(p, "rows"),
            }),
            K::Stat => Self::Stat(StatProps {
                value: p.get("value").and_then(|v| match v {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                }),
                trend: enum_prop(p, "trend").ok(),
            }),
            K::Checkbox | K::Radio | K::Toggle => Self::Toggle(ToggleProps {
                checked: p.get("checked").and_then(|v| v.as_bool()).unwrap_or(false),
            }),
            K::Footer
            | K::Form
            | K::Accordion
            | K::Hero
            | K::Pricing
            | K::Testimonial
            | K::Timeline
            | K::Link
            | K::Map
            | K::Divider
            | K::Modal
            | K::Unknown(_) => Self::None,
        }
    }
}

/// Props every kind accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommonProps {
    pub width: Option<WidthToken>,
    pub align: Option<Align>,
}

impl CommonProps {
    pub fn parse(p: &PropsMap) -> Self {
        Self {
            width: enum_prop(p, "width").ok(),
            align: enum_prop(p, "align").ok(),
        }
    }
}

/// Typed view of a [`ComponentNode`], built leniently.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub label: Option<String>,
    pub props: Props,
    pub common: CommonProps,
    /// Original props bag, carried through to the styled output.
    pub raw_props: PropsMap,
    pub children: Vec<Component>,
}

impl Component {
    /// Convert a raw node. A missing `type` becomes `Unknown("")`.
    pub fn from_node(node: &ComponentNode) -> Self {
        let kind = node
            .kind_str()
            .map(ComponentKind::from_type_name)
            .unwrap_or_else(|| ComponentKind::Unknown(String::new()));
        let raw_props = node.props().cloned().unwrap_or_default();
        Self {
            props: Props::parse(&kind, &raw_props),
            common: CommonProps::parse(&raw_props),
            label: node.label_str().map(str::to_owned),
            kind,
            raw_props,
            children: node.children().iter().map(Self::from_node).collect(),
        }
    }

    /// Label or an empty string.
    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/component.rs"]
mod tests;
