use crate::foundation::core::Edges;
use crate::scene::component::{
    Align, CommonProps, Component, ComponentKind, MediaSize, Props, WidthToken,
};
use crate::scene::model::{LayoutMode, PaddingSize, PropsMap, Screen, Section};
use crate::style::record::{
    Border, Display, FlexDirection, FontStyle, GridColumns, Side, StyleRecord, TextAlign, Width,
};
use crate::style::tables::{self, BUTTON_WEIGHT, GRID_MIN_COLUMN, SIDEBAR_WIDTH, tint};
use crate::tokens::color::{ColorKind, classify};
use crate::tokens::design_system::DesignSystem;
use crate::tokens::set::{ResolvedTokens, ThemeMode, TokenSet, TypoKey, resolve_tokens};
use serde::Serialize;

/// Minimum page height of every screen.
pub const MIN_PAGE_HEIGHT: f64 = 600.0;

/// Styled document plus the token set it was resolved against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Beautified {
    pub screens: Vec<StyledScreen>,
    pub resolved_tokens: ResolvedTokens,
    #[serde(skip)]
    pub tokens: TokenSet,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledScreen {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub style: StyleRecord,
    pub sections: Vec<StyledSection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub layout: LayoutMode,
    pub style: StyleRecord,
    pub components: Vec<StyledComponent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "props")]
    pub raw_props: PropsMap,
    #[serde(skip)]
    pub props: Props,
    #[serde(skip)]
    pub common: CommonProps,
    pub style: StyleRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StyledComponent>,
}

impl StyledComponent {
    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

fn font(tokens: &TokenSet, key: TypoKey) -> FontStyle {
    let t = tokens.typo(key);
    FontStyle {
        font_family: None,
        font_size: t.size,
        font_weight: t.weight,
        line_height: t.line_height,
        letter_spacing: t.letter_spacing,
    }
}

fn page_style(tokens: &TokenSet) -> StyleRecord {
    StyleRecord {
        background_color: Some(tokens.color("background").to_owned()),
        color: Some(tokens.color("text").to_owned()),
        font: Some(FontStyle {
            font_family: Some(tokens.font_family.clone()),
            ..font(tokens, TypoKey::Body)
        }),
        min_height: Some(MIN_PAGE_HEIGHT),
        ..StyleRecord::default()
    }
}

/// Base style of a section: layout, padding and background.
pub fn section_style(tokens: &TokenSet, section: &Section) -> StyleRecord {
    let layout = section.layout_mode();
    let display = match layout {
        LayoutMode::Row => Display::flex(FlexDirection::Row, tokens.spacing("4")),
        LayoutMode::Column => Display::flex(FlexDirection::Column, tokens.spacing("4")),
        LayoutMode::Stack => Display::flex(FlexDirection::Column, tokens.spacing("2")),
        LayoutMode::Grid => Display::Grid {
            grid_template_columns: match section.column_count() {
                Some(n) if n > 0 => GridColumns::Repeat(n),
                _ => GridColumns::AutoFit {
                    min: GRID_MIN_COLUMN,
                },
            },
            gap: tokens.spacing("6"),
        },
        LayoutMode::SidebarLeft => Display::Grid {
            grid_template_columns: GridColumns::Sidebar {
                side: Side::Left,
                width: SIDEBAR_WIDTH,
            },
            gap: tokens.spacing("6"),
        },
        LayoutMode::SidebarRight => Display::Grid {
            grid_template_columns: GridColumns::Sidebar {
                side: Side::Right,
                width: SIDEBAR_WIDTH,
            },
            gap: tokens.spacing("6"),
        },
        LayoutMode::Split => Display::Grid {
            grid_template_columns: GridColumns::Halves,
            gap: tokens.spacing("8"),
        },
    };
    let padding = section
        .padding_str()
        .and_then(PaddingSize::parse)
        .map_or_else(|| tokens.spacing("6"), PaddingSize::px);

    let mut style = StyleRecord {
        padding: Some(Edges::all(padding)),
        display: Some(display),
        ..StyleRecord::default()
    };
    if let Some(bg) = section.background_str().map(str::trim) {
        if bg == "gradient" {
            style.background_image = Some(tokens.section_gradient());
        } else {
            match classify(bg) {
                ColorKind::Gradient => style.background_image = Some(bg.to_owned()),
                ColorKind::Hex(_) | ColorKind::Function | ColorKind::Keyword(_) => {
                    style.background_color = Some(bg.to_owned())
                }
                ColorKind::Invalid => match tokens.colors.get(bg) {
                    Some(named) => style.background_color = Some(named.clone()),
                    None => {
                        tracing::warn!(background = bg, "unresolvable section background");
                        style.background_color = Some(bg.to_owned());
                    }
                },
            }
        }
    }
    style
}

/// Style of one component, by kind-specific dispatch followed by the common props.
pub fn component_style(tokens: &TokenSet, comp: &Component) -> StyleRecord {
    let mut style = kind_style(tokens, comp);

    if let Some((display, padding)) = tables::container_flow(tokens, &comp.kind) {
        style.display.get_or_insert(display);
        style.padding.get_or_insert(padding);
    }

    // Applied last: the width prop overrides any width set by dispatch.
    if let Some(w) = comp.common.width {
        style.width = Some(w.to_width());
    }
    if let Some(align) = comp.common.align {
        style.text_align = Some(match align {
            Align::Left => TextAlign::Left,
            Align::Center => TextAlign::Center,
            Align::Right => TextAlign::Right,
        });
    }
    style
}

fn kind_style(tokens: &TokenSet, comp: &Component) -> StyleRecord {
    use ComponentKind as K;
    let color = |k: &str| tokens.color(k).to_owned();
    let border = || Some(Border::solid(1.0, tokens.color("border")));
    match &comp.props {
        Props::Button(p) => {
            let (bg, fg, border) = tables::button_colors(tokens, p.variant);
            let (padding, key, height) = tables::button_metrics(tokens, p.size);
            StyleRecord {
                background_color: Some(bg),
                color: Some(fg),
                border,
                padding: Some(padding),
                font: Some(FontStyle {
                    font_weight: BUTTON_WEIGHT,
                    ..font(tokens, key)
                }),
                border_radius: Some(tokens.radius("md")),
                height: Some(height),
                width: Some(Width::Auto),
                ..StyleRecord::default()
            }
        }
        Props::Heading(p) => StyleRecord {
            color: Some(color("text")),
            font: Some(font(tokens, tables::heading_typo(p.size))),
            ..StyleRecord::default()
        },
        Props::Text(p) => StyleRecord {
            color: Some(tables::text_color(tokens, p.variant)),
            font: Some(font(tokens, tables::text_typo(p.size, p.variant))),
            ..StyleRecord::default()
        },
        Props::Input(_) | Props::Select(_) => StyleRecord {
            background_color: Some(color("background")),
            color: Some(color("text")),
            border: border(),
            padding: Some(Edges::symmetric(0.0, tokens.spacing("3"))),
            font: Some(font(tokens, TypoKey::Body)),
            border_radius: Some(if comp.kind == K::SearchBar {
                tokens.radius("full")
            } else {
                tokens.radius("md")
            }),
            height: Some(if comp.kind == K::Textarea { 96.0 } else { 40.0 }),
            ..StyleRecord::default()
        },
        Props::Badge(variant) => {
            let (bg, fg) = tables::badge_colors(tokens, *variant);
            StyleRecord {
                background_color: Some(bg),
                color: Some(fg),
                padding: Some(Edges::symmetric(tokens.spacing("1"), tokens.spacing("3"))),
                font: Some(FontStyle {
                    font_weight: 600,
                    ..font(tokens, TypoKey::Caption)
                }),
                border_radius: Some(tokens.radius("full")),
                height: Some(24.0),
                width: Some(Width::Auto),
                ..StyleRecord::default()
            }
        }
        Props::Alert(variant) => {
            let key = tables::alert_color_key(*variant);
            StyleRecord {
                background_color: Some(tint(tokens.color(key), 0x1A)),
                color: Some(color("text")),
                border: Some(Border::solid(1.0, tint(tokens.color(key), 0x4D))),
                padding: Some(Edges::all(tokens.spacing("4"))),
                font: Some(font(tokens, TypoKey::BodySm)),
                border_radius: Some(tokens.radius("md")),
                ..StyleRecord::default()
            }
        }
        Props::Card(variant) => {
            let (bg, border, shadow) = tables::card_surface(tokens, *variant);
            StyleRecord {
                background_color: Some(bg),
                border,
                box_shadow: shadow.map(|k| tokens.shadow(k).to_owned()),
                border_radius: Some(tokens.radius("lg")),
                ..StyleRecord::default()
            }
        }
        Props::Nav(p) => {
            let (bg, fg, border) = tables::nav_colors(tokens, p.variant);
            StyleRecord {
                background_color: Some(bg),
                color: Some(fg),
                border,
                font: Some(font(tokens, TypoKey::BodySm)),
                min_height: Some(56.0),
                ..StyleRecord::default()
            }
        }
        Props::Sidebar(p) => {
            let (bg, fg, border) = tables::sidebar_colors(tokens, p.variant);
            StyleRecord {
                background_color: Some(bg),
                color: Some(fg),
                border,
                font: Some(font(tokens, TypoKey::BodySm)),
                width: Some(Width::Px(SIDEBAR_WIDTH)),
                ..StyleRecord::default()
            }
        }
        Props::Items(_) => match comp.kind {
            K::Breadcrumb => StyleRecord {
                color: Some(color("textSecondary")),
                font: Some(font(tokens, TypoKey::BodySm)),
                ..StyleRecord::default()
            },
            K::Tab => StyleRecord {
                color: Some(color("textSecondary")),
                border: border(),
                font: Some(FontStyle {
                    font_weight: 500,
                    ..font(tokens, TypoKey::BodySm)
                }),
                ..StyleRecord::default()
            },
            _ => StyleRecord {
                color: Some(color("text")),
                font: Some(font(tokens, TypoKey::Body)),
                ..StyleRecord::default()
            },
        },
        Props::Image(p) => {
            let height = tables::image_height(p.size);
            let width = match (p.aspect_ratio, p.size) {
                (Some(ar), _) => Width::Px(height / ar.height_over_width()),
                (None, Some(MediaSize::Full)) => Width::Percent(100.0),
                (None, _) => Width::Px(height * 16.0 / 9.0),
            };
            StyleRecord {
                background_color: Some(color("surface")),
                border: border(),
                border_radius: Some(tokens.radius("md")),
                height: Some(height),
                width: Some(width),
                ..StyleRecord::default()
            }
        }
        Props::Avatar(size) => {
            let d = tables::avatar_size(*size);
            StyleRecord {
                background_color: Some(tint(tokens.color("primary"), 0x33)),
                color: Some(color("primary")),
                font: Some(FontStyle {
                    font_size: (d * 0.4).round(),
                    font_weight: 600,
                    ..font(tokens, TypoKey::Body)
                }),
                border_radius: Some(tokens.radius("full")),
                width: Some(Width::Px(d)),
                height: Some(d),
                ..StyleRecord::default()
            }
        }
        Props::Video(height) => StyleRecord {
            background_color: Some(color("text")),
            color: Some(color("background")),
            border_radius: Some(tokens.radius("md")),
            height: Some(tables::media_height(*height)),
            width: Some(Width::Percent(100.0)),
            ..StyleRecord::default()
        },
        Props::Chart(p) => StyleRecord {
            background_color: Some(color("background")),
            color: Some(color("primary")),
            border: border(),
            padding: Some(Edges::all(tokens.spacing("4"))),
            border_radius: Some(tokens.radius("md")),
            height: Some(tables::media_height(p.height)),
            width: Some(Width::Percent(100.0)),
            ..StyleRecord::default()
        },
        Props::Icon(p) => {
            let d = tables::icon_size(p.size);
            StyleRecord {
                color: Some(color("textSecondary")),
                width: Some(Width::Px(d)),
                height: Some(d),
                ..StyleRecord::default()
            }
        }
        Props::Slider(_) => StyleRecord {
            color: Some(color("primary")),
            background_color: Some(color("border")),
            border_radius: Some(tokens.radius("full")),
            ..StyleRecord::default()
        },
        Props::Progress(_) => StyleRecord {
            color: Some(color("primary")),
            background_color: Some(color("surface")),
            border_radius: Some(tokens.radius("full")),
            font: Some(font(tokens, TypoKey::Caption)),
            ..StyleRecord::default()
        },
        Props::Stepper(_) => StyleRecord {
            color: Some(color("primary")),
            font: Some(font(tokens, TypoKey::Caption)),
            ..StyleRecord::default()
        },
        Props::Pagination(_) => StyleRecord {
            color: Some(color("text")),
            border: border(),
            border_radius: Some(tokens.radius("md")),
            font: Some(font(tokens, TypoKey::BodySm)),
            ..StyleRecord::default()
        },
        Props::Spacer(size) => StyleRecord {
            height: Some(tables::spacer_height(*size)),
            ..StyleRecord::default()
        },
        Props::Table(_) => StyleRecord {
            background_color: Some(color("background")),
            color: Some(color("text")),
            border: border(),
            border_radius: Some(tokens.radius("md")),
            font: Some(font(tokens, TypoKey::BodySm)),
            ..StyleRecord::default()
        },
        Props::Stat(_) => StyleRecord {
            background_color: Some(color("background")),
            color: Some(color("text")),
            border: border(),
            padding: Some(Edges::all(tokens.spacing("4"))),
            border_radius: Some(tokens.radius("lg")),
            font: Some(font(tokens, TypoKey::H3)),
            ..StyleRecord::default()
        },
        Props::Toggle(_) => StyleRecord {
            color: Some(color("primary")),
            font: Some(font(tokens, TypoKey::Body)),
            ..StyleRecord::default()
        },
        Props::None => match &comp.kind {
            K::Footer => StyleRecord {
                background_color: Some(color("surface")),
                color: Some(color("textSecondary")),
                font: Some(font(tokens, TypoKey::BodySm)),
                ..StyleRecord::default()
            },
            K::Hero => StyleRecord {
                text_align: Some(TextAlign::Center),
                ..StyleRecord::default()
            },
            K::Testimonial => StyleRecord {
                background_color: Some(color("surface")),
                border_radius: Some(tokens.radius("lg")),
                font: Some(FontStyle {
                    font_weight: 400,
                    ..font(tokens, TypoKey::BodyLg)
                }),
                ..StyleRecord::default()
            },
            K::Accordion => StyleRecord {
                border: border(),
                border_radius: Some(tokens.radius("md")),
                ..StyleRecord::default()
            },
            K::Pricing | K::Timeline | K::Form => StyleRecord::default(),
            K::Link => StyleRecord {
                color: Some(color("primary")),
                font: Some(FontStyle {
                    font_weight: 500,
                    ..font(tokens, TypoKey::Body)
                }),
                ..StyleRecord::default()
            },
            K::Map => StyleRecord {
                background_color: Some(color("surface")),
                border: border(),
                border_radius: Some(tokens.radius("md")),
                height: Some(240.0),
                width: Some(Width::Percent(100.0)),
                ..StyleRecord::default()
            },
            K::Divider => StyleRecord {
                background_color: Some(color("border")),
                height: Some(1.0),
                width: Some(Width::Percent(100.0)),
                ..StyleRecord::default()
            },
            K::Modal => StyleRecord {
                background_color: Some(color("background")),
                box_shadow: Some(tokens.shadow("xl").to_owned()),
                border_radius: Some(tokens.radius("lg")),
                padding: Some(Edges::all(tokens.spacing("6"))),
                ..StyleRecord::default()
            },
            K::Unknown(name) => {
                if !name.is_empty() {
                    tracing::warn!(kind = %name, "unknown component type left unstyled");
                }
                StyleRecord::default()
            }
            _ => StyleRecord::default(),
        },
    }
}

fn style_component(tokens: &TokenSet, comp: &Component) -> StyledComponent {
    StyledComponent {
        style: component_style(tokens, comp),
        kind: comp.kind.clone(),
        label: comp.label.clone(),
        raw_props: comp.raw_props.clone(),
        props: comp.props.clone(),
        common: comp.common,
        children: comp
            .children
            .iter()
            .map(|c| style_component(tokens, c))
            .collect(),
    }
}

/// Style every screen against the resolved tokens.
///
/// Pure function of its inputs: the same screens, design system and theme always produce
/// byte-identical serialized output.
#[tracing::instrument(skip(screens, design_system), fields(screens = screens.len()))]
pub fn beautify(
    screens: &[Screen],
    design_system: Option<&DesignSystem>,
    theme: ThemeMode,
) -> Beautified {
    let tokens = resolve_tokens(design_system, theme);
    let page = page_style(&tokens);
    let screens = screens
        .iter()
        .map(|screen| StyledScreen {
            name: screen.name_str().to_owned(),
            title: screen.title_str().map(str::to_owned),
            style: page.clone(),
            sections: screen
                .sections()
                .iter()
                .map(|section| StyledSection {
                    name: section.name_str().map(str::to_owned),
                    layout: section.layout_mode(),
                    style: section_style(&tokens, section),
                    components: section
                        .components()
                        .iter()
                        .map(|node| style_component(&tokens, &Component::from_node(node)))
                        .collect(),
                })
                .collect(),
        })
        .collect::<Vec<_>>();
    tracing::debug!(screens = screens.len(), "styled document");
    Beautified {
        screens,
        resolved_tokens: tokens.resolved(),
        tokens,
    }
}

impl WidthToken {
    /// Style width for this token.
    pub fn to_width(self) -> Width {
        self.percent().map_or(Width::Auto, Width::Percent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolve.rs"]
mod tests;
