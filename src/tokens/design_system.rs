use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied design-system document.
///
/// Every field is optional: missing tables fall back to built-in defaults during token
/// resolution, and the validator reports what a complete design system should carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    /// Light palette. Values are kept as raw JSON so that malformed entries can be reported
    /// instead of failing the parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<BTreeMap<String, serde_json::Value>>,
    /// Dark palette, used when rendering with the dark theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_color_palette: Option<BTreeMap<String, serde_json::Value>>,
    /// Font family and type scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyDef>,
    /// Spacing unit, spacing scale and radii.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingDef>,
    /// Named shadows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<BTreeMap<String, ShadowDef>>,
}

/// Typography section of a design system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyDef {
    /// CSS font-family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Scale keyed by semantic size name (`display`, `h1`…`h6`, `body`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<BTreeMap<String, TypoDef>>,
}

/// One partial type-scale entry. Missing fields inherit from the default entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypoDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeightDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Length>,
}

/// Spacing section of a design system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<BTreeMap<String, Length>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BTreeMap<String, Length>>,
}

/// A CSS-ish length: a bare number or a string with `px`, `rem` or `em` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Length {
    /// Bare number.
    Unitless(f64),
    /// `NNpx`.
    #[serde(serialize_with = "ser_px")]
    Px(f64),
    /// `NNrem` (16 px root).
    #[serde(serialize_with = "ser_rem")]
    Rem(f64),
    /// `NNem`, relative to the element font size.
    #[serde(serialize_with = "ser_em")]
    Em(f64),
}

pub(crate) const ROOT_FONT_PX: f64 = 16.0;

impl Length {
    /// Absolute pixels; `em` resolves against `font_px`, unitless is taken as pixels.
    pub fn to_px(self, font_px: f64) -> f64 {
        match self {
            Self::Unitless(v) | Self::Px(v) => v,
            Self::Rem(v) => v * ROOT_FONT_PX,
            Self::Em(v) => v * font_px,
        }
    }

    /// Ratio relative to `font_px`; unitless and `em` are already ratios.
    pub fn to_ratio(self, font_px: f64) -> f64 {
        match self {
            Self::Unitless(v) | Self::Em(v) => v,
            Self::Px(v) => v / font_px.max(1.0),
            Self::Rem(v) => v * ROOT_FONT_PX / font_px.max(1.0),
        }
    }

    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let num = |t: &str| -> Result<f64, String> {
            t.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid length \"{s}\""))
        };
        if let Some(v) = s.strip_suffix("rem") {
            Ok(Self::Rem(num(v)?))
        } else if let Some(v) = s.strip_suffix("px") {
            Ok(Self::Px(num(v)?))
        } else if let Some(v) = s.strip_suffix("em") {
            Ok(Self::Em(num(v)?))
        } else {
            Ok(Self::Unitless(num(s)?))
        }
    }
}

fn ser_px<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{v}px"))
}

fn ser_rem<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{v}rem"))
}

fn ser_em<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{v}em"))
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self::Unitless(v)),
            Repr::Str(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Font weight as a number (`600`) or keyword (`"bold"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontWeightDef(pub u16);

impl<'de> Deserialize<'de> for FontWeightDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        let w = match Repr::deserialize(deserializer)? {
            Repr::Num(v) => v.round().clamp(1.0, 1000.0) as u16,
            Repr::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "thin" => 100,
                "light" => 300,
                "normal" | "regular" => 400,
                "medium" => 500,
                "semibold" => 600,
                "bold" => 700,
                "extrabold" => 800,
                "black" => 900,
                other => other
                    .parse::<u16>()
                    .map_err(|_| serde::de::Error::custom(format!("invalid font weight \"{s}\"")))?,
            },
        };
        Ok(Self(w))
    }
}

/// A shadow given either as a CSS string or as a single structured layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShadowDef {
    /// `"0 1px 2px rgba(0,0,0,0.05)"`.
    Css(String),
    /// Structured layer.
    Layer {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        blur: f64,
        #[serde(default)]
        spread: f64,
        color: String,
    },
}

impl ShadowDef {
    /// CSS `box-shadow` value.
    pub fn to_css(&self) -> String {
        match self {
            Self::Css(s) => s.clone(),
            Self::Layer {
                x,
                y,
                blur,
                spread,
                color,
            } => format!("{x}px {y}px {blur}px {spread}px {color}"),
        }
    }
}
