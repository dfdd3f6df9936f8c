use crate::tokens::color::{is_gradient, parse_hex};
use crate::tokens::defaults;
use crate::tokens::design_system::{
    DesignSystem, FontWeightDef, Length, ROOT_FONT_PX, ShadowDef, SpacingDef, TypoDef,
    TypographyDef,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which palette the run resolves against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// `colorPalette` over the light defaults.
    #[default]
    Light,
    /// `darkColorPalette` over the dark defaults.
    Dark,
}

/// Semantic typography-scale key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypoKey {
    Display,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    BodyLg,
    Body,
    BodySm,
    Caption,
    Overline,
}

impl TypoKey {
    /// Every key, in scale order.
    pub const ALL: [TypoKey; 12] = [
        Self::Display,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::BodyLg,
        Self::Body,
        Self::BodySm,
        Self::Caption,
        Self::Overline,
    ];

    /// Name used in design-system documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::BodyLg => "bodyLg",
            Self::Body => "body",
            Self::BodySm => "bodySm",
            Self::Caption => "caption",
            Self::Overline => "overline",
        }
    }
}

/// Resolved metrics of one type-scale entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypoStyle {
    /// Font size in px.
    pub size: f64,
    /// Line height as a ratio of `size`.
    pub line_height: f64,
    /// Numeric font weight.
    pub weight: u16,
    /// Letter spacing in em.
    pub letter_spacing: f64,
}

impl TypoStyle {
    fn merged(self, user: &TypoDef) -> Self {
        let size = user
            .size
            .map(|l| l.to_px(self.size))
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(self.size);
        Self {
            size,
            line_height: user
                .line_height
                .map(|l| l.to_ratio(size))
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(self.line_height),
            weight: user.weight.map(|FontWeightDef(w)| w).unwrap_or(self.weight),
            letter_spacing: user
                .letter_spacing
                .map(|l| l.to_ratio(size))
                .filter(|v| v.is_finite())
                .unwrap_or(self.letter_spacing),
        }
    }
}

/// Fully resolved design tokens for one pipeline run.
///
/// Built once by [`resolve_tokens`] and then only read. Every key present in the built-in
/// tables is guaranteed to be present here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Palette the colors were resolved against.
    pub theme: ThemeMode,
    /// Color table.
    pub colors: BTreeMap<String, String>,
    /// CSS font-family list.
    pub font_family: String,
    /// Type scale.
    pub typography: BTreeMap<String, TypoStyle>,
    /// Base spacing unit in px.
    pub spacing_unit: f64,
    /// Spacing scale in px.
    pub spacing: BTreeMap<String, f64>,
    /// Corner radii in px.
    pub radii: BTreeMap<String, f64>,
    /// CSS box-shadow values.
    pub shadows: BTreeMap<String, String>,
}

impl TokenSet {
    /// Built-in tokens without any user overrides.
    pub fn defaults(theme: ThemeMode) -> Self {
        resolve_tokens(None, theme)
    }

    /// Color by key; required semantic keys are always present.
    pub fn color(&self, key: &str) -> &str {
        if let Some(v) = self.colors.get(key) {
            return v;
        }
        defaults::LIGHT_PALETTE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or("#000000")
    }

    /// Spacing by scale key, falling back to `key * unit` for numeric keys.
    pub fn spacing(&self, key: &str) -> f64 {
        self.spacing
            .get(key)
            .copied()
            .or_else(|| key.parse::<f64>().ok().map(|k| k * self.spacing_unit))
            .unwrap_or(0.0)
    }

    /// Corner radius by key.
    pub fn radius(&self, key: &str) -> f64 {
        self.radii
            .get(key)
            .copied()
            .or_else(|| {
                defaults::RADII
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
            .unwrap_or(0.0)
    }

    /// Shadow by key, empty when unknown.
    pub fn shadow(&self, key: &str) -> &str {
        self.shadows.get(key).map(String::as_str).unwrap_or("")
    }

    /// Typography entry by key.
    pub fn typo(&self, key: TypoKey) -> TypoStyle {
        self.typography
            .get(key.as_str())
            .copied()
            .unwrap_or_else(|| default_typo(key.as_str()))
    }

    /// Gradient used for `background: "gradient"` sections.
    ///
    /// A stored `gradient` color token wins; otherwise a two-stop gradient is synthesized from
    /// primary and secondary at 10% opacity.
    pub fn section_gradient(&self) -> String {
        if let Some(g) = self.colors.get("gradient")
            && is_gradient(g)
        {
            return g.clone();
        }
        let stop = |key: &str| -> String {
            let c = parse_hex(self.color(key))
                .or_else(|_| parse_hex(default_color(key)))
                .unwrap_or(crate::foundation::core::Rgba8::opaque(0, 0, 0));
            format!("#{:02X}{:02X}{:02X}1A", c.r, c.g, c.b)
        };
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            stop("primary"),
            stop("secondary")
        )
    }

    /// Flattened copy for downstream consumers.
    pub fn resolved(&self) -> ResolvedTokens {
        ResolvedTokens {
            theme: self.theme,
            colors: self.colors.clone(),
            typography: self
                .typography
                .iter()
                .map(|(k, t)| {
                    (
                        k.clone(),
                        ResolvedTypography {
                            font_family: self.font_family.clone(),
                            font_size: t.size,
                            font_weight: t.weight,
                            line_height: t.line_height,
                            letter_spacing: t.letter_spacing,
                        },
                    )
                })
                .collect(),
            spacing: self.spacing.clone(),
            shadows: self.shadows.clone(),
            radii: self.radii.clone(),
        }
    }

    /// Express this token set as a design-system document.
    pub fn to_design_system(&self) -> DesignSystem {
        let palette = self
            .colors
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect::<BTreeMap<_, _>>();
        let dark_color_palette = match self.theme {
            ThemeMode::Light => None,
            ThemeMode::Dark => Some(palette.clone()),
        };
        DesignSystem {
            color_palette: Some(palette),
            dark_color_palette,
            typography: Some(TypographyDef {
                font_family: Some(self.font_family.clone()),
                scale: Some(
                    self.typography
                        .iter()
                        .map(|(k, t)| {
                            (
                                k.clone(),
                                TypoDef {
                                    size: Some(Length::Px(t.size)),
                                    line_height: Some(Length::Unitless(t.line_height)),
                                    weight: Some(FontWeightDef(t.weight)),
                                    letter_spacing: Some(Length::Em(t.letter_spacing)),
                                },
                            )
                        })
                        .collect(),
                ),
            }),
            spacing: Some(SpacingDef {
                unit: Some(Length::Px(self.spacing_unit)),
                scale: Some(
                    self.spacing
                        .iter()
                        .map(|(k, v)| (k.clone(), Length::Px(*v)))
                        .collect(),
                ),
                border_radius: Some(
                    self.radii
                        .iter()
                        .map(|(k, v)| (k.clone(), Length::Px(*v)))
                        .collect(),
                ),
            }),
            shadows: Some(
                self.shadows
                    .iter()
                    .map(|(k, v)| (k.clone(), ShadowDef::Css(v.clone())))
                    .collect(),
            ),
        }
    }
}

/// Serializable, flattened token output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTokens {
    pub theme: ThemeMode,
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, ResolvedTypography>,
    pub spacing: BTreeMap<String, f64>,
    pub shadows: BTreeMap<String, String>,
    pub radii: BTreeMap<String, f64>,
}

/// One type-scale entry with the font family folded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: f64,
    pub letter_spacing: f64,
}

fn default_color(key: &str) -> &'static str {
    defaults::LIGHT_PALETTE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or("#000000")
}

fn default_typo(key: &str) -> TypoStyle {
    let (_, size, line_height, weight, letter_spacing) = defaults::TYPE_SCALE
        .iter()
        .copied()
        .find(|(k, ..)| *k == key)
        .unwrap_or(("body", 16.0, 1.6, 400, 0.0));
    TypoStyle {
        size,
        line_height,
        weight,
        letter_spacing,
    }
}

/// Merge built-in defaults with an optional design system.
///
/// Each table (colors, type scale, spacing, radii, shadows) is merged independently. User
/// values win per key; keys missing from the user document keep their default.
#[tracing::instrument(skip(design_system))]
pub fn resolve_tokens(design_system: Option<&DesignSystem>, theme: ThemeMode) -> TokenSet {
    let base_palette = match theme {
        ThemeMode::Light => defaults::LIGHT_PALETTE,
        ThemeMode::Dark => defaults::DARK_PALETTE,
    };
    let mut colors = base_palette
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>();
    let user_palette = design_system.and_then(|ds| match theme {
        ThemeMode::Light => ds.color_palette.as_ref(),
        ThemeMode::Dark => ds.dark_color_palette.as_ref(),
    });
    if let Some(palette) = user_palette {
        for (k, v) in palette {
            match v.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => {
                    colors.insert(k.clone(), s.to_owned());
                }
                _ => tracing::debug!(key = %k, "ignoring non-string color token"),
            }
        }
    }

    let typography_def = design_system.and_then(|ds| ds.typography.as_ref());
    let font_family = typography_def
        .and_then(|t| t.font_family.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults::FONT_FAMILY)
        .to_owned();

    let mut typography = defaults::TYPE_SCALE
        .iter()
        .map(|(k, ..)| (k.to_string(), default_typo(k)))
        .collect::<BTreeMap<_, _>>();
    if let Some(scale) = typography_def.and_then(|t| t.scale.as_ref()) {
        for (k, partial) in scale {
            let base = typography
                .get(k)
                .copied()
                .unwrap_or_else(|| default_typo("body"));
            typography.insert(k.clone(), base.merged(partial));
        }
    }

    let spacing_def = design_system.and_then(|ds| ds.spacing.as_ref());
    let spacing_unit = spacing_def
        .and_then(|s| s.unit)
        .map(|u| u.to_px(ROOT_FONT_PX))
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(defaults::SPACING_UNIT);
    let mut spacing = defaults::SPACING_KEYS
        .iter()
        .map(|k| {
            let n = k.parse::<f64>().unwrap_or(0.0);
            (k.to_string(), n * spacing_unit)
        })
        .collect::<BTreeMap<_, _>>();
    if let Some(scale) = spacing_def.and_then(|s| s.scale.as_ref()) {
        for (k, v) in scale {
            let px = v.to_px(ROOT_FONT_PX);
            if px.is_finite() && px >= 0.0 {
                spacing.insert(k.clone(), px);
            }
        }
    }

    let mut radii = defaults::RADII
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect::<BTreeMap<_, _>>();
    if let Some(user) = spacing_def.and_then(|s| s.border_radius.as_ref()) {
        for (k, v) in user {
            let px = v.to_px(ROOT_FONT_PX);
            if px.is_finite() && px >= 0.0 {
                radii.insert(k.clone(), px);
            }
        }
    }

    let mut shadows = defaults::SHADOWS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>();
    if let Some(user) = design_system.and_then(|ds| ds.shadows.as_ref()) {
        for (k, v) in user {
            shadows.insert(k.clone(), v.to_css());
        }
    }

    TokenSet {
        theme,
        colors,
        font_family,
        typography,
        spacing_unit,
        spacing,
        radii,
        shadows,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/set.rs"]
mod tests;
