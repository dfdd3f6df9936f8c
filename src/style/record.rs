use crate::foundation::core::Edges;
use serde::{Serialize, Serializer};

/// Resolved visual attributes of one node.
///
/// Sparse: unset fields are omitted from the serialized form. Layout attributes live in
/// [`Display`] so grid settings can never sit on a flex node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Gradient backgrounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl StyleRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Vertical padding, zero when unset.
    pub fn padding_vertical(&self) -> f64 {
        self.padding.map_or(0.0, Edges::vertical)
    }

    pub fn padding_or_zero(&self) -> Edges {
        self.padding.unwrap_or_default()
    }

    /// Font size, or `fallback` when no font is set.
    pub fn font_size_or(&self, fallback: f64) -> f64 {
        self.font.as_ref().map_or(fallback, |f| f.font_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: u16,
    /// Ratio of `font_size`.
    pub line_height: f64,
    /// In em.
    pub letter_spacing: f64,
}

/// Solid border, serialized as `"<w>px solid <color>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f64,
    pub color: String,
}

impl Border {
    pub fn solid(width: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{}px solid {}", self.width, self.color)
    }
}

impl Serialize for Border {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_css())
    }
}

/// Horizontal extent of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    Px(f64),
    /// Percentage of the slot the node is placed in.
    Percent(f64),
    Auto,
}

impl Width {
    /// Resolve against the slot width. `Auto` yields `intrinsic` when the drawer knows one.
    pub fn resolve(self, slot: f64, intrinsic: Option<f64>) -> f64 {
        match self {
            Self::Px(px) => px.min(slot),
            Self::Percent(p) => slot * p / 100.0,
            Self::Auto => intrinsic.map_or(slot, |w| w.min(slot)),
        }
    }
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Px(px) => s.serialize_f64(*px),
            Self::Percent(p) => s.serialize_str(&format!("{}%", trim_float(*p))),
            Self::Auto => s.serialize_str("auto"),
        }
    }
}

fn trim_float(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    Stretch,
    FlexStart,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    SpaceBetween,
}

/// Which side the narrow sidebar column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Grid column template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridColumns {
    /// `repeat(auto-fit, minmax(<min>px, 1fr))`.
    AutoFit { min: f64 },
    /// `repeat(<n>, 1fr)`.
    Repeat(u32),
    /// `<side>px 1fr` or `1fr <side>px`.
    Sidebar { side: Side, width: f64 },
    /// `1fr 1fr`.
    Halves,
}

impl GridColumns {
    pub fn to_css(self) -> String {
        match self {
            Self::AutoFit { min } => format!("repeat(auto-fit, minmax({min}px, 1fr))"),
            Self::Repeat(n) => format!("repeat({n}, 1fr)"),
            Self::Sidebar {
                side: Side::Left,
                width,
            } => format!("{width}px 1fr"),
            Self::Sidebar {
                side: Side::Right,
                width,
            } => format!("1fr {width}px"),
            Self::Halves => "1fr 1fr".to_owned(),
        }
    }
}

impl Serialize for GridColumns {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_css())
    }
}

/// Layout mode of a node's content box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "display", rename_all = "lowercase")]
pub enum Display {
    Block,
    #[serde(rename_all = "camelCase")]
    Flex {
        flex_direction: FlexDirection,
        align_items: AlignItems,
        justify_content: JustifyContent,
        gap: f64,
    },
    #[serde(rename_all = "camelCase")]
    Grid {
        grid_template_columns: GridColumns,
        gap: f64,
    },
}

impl Display {
    pub fn flex(direction: FlexDirection, gap: f64) -> Self {
        Self::Flex {
            flex_direction: direction,
            align_items: match direction {
                FlexDirection::Row => AlignItems::Center,
                FlexDirection::Column => AlignItems::Stretch,
            },
            justify_content: JustifyContent::FlexStart,
            gap,
        }
    }

    pub fn gap(self) -> f64 {
        match self {
            Self::Block => 0.0,
            Self::Flex { gap, .. } | Self::Grid { gap, .. } => gap,
        }
    }

    /// `true` for a horizontal flex container.
    pub fn is_row(self) -> bool {
        matches!(
            self,
            Self::Flex {
                flex_direction: FlexDirection::Row,
                ..
            }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/record.rs"]
mod tests;
