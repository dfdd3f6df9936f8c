//! Lookup tables mapping component props onto tokens.

use crate::foundation::core::Edges;
use crate::scene::component::{
    AlertVariant, AvatarSize, BadgeVariant, ButtonVariant, CardVariant, ComponentKind,
    HeadingSize, MediaSize, NavVariant, SidebarVariant, Size3, SpacerSize, TextVariant,
};
use crate::style::record::{AlignItems, Border, Display, FlexDirection, JustifyContent};
use crate::tokens::color::parse_hex;
use crate::tokens::set::{TokenSet, TypoKey};

/// Width of the narrow column in sidebar layouts and of sidebar components.
pub const SIDEBAR_WIDTH: f64 = 280.0;

/// Minimum track width of auto-fit grids.
pub const GRID_MIN_COLUMN: f64 = 280.0;

pub(crate) const BUTTON_WEIGHT: u16 = 600;

/// `color` with an 8-bit alpha suffix, e.g. `tint("#3B82F6", 0x1A)` → `#3B82F61A`.
/// Non-hex values are returned unchanged.
pub fn tint(color: &str, alpha: u8) -> String {
    match parse_hex(color) {
        Ok(c) => format!("#{:02X}{:02X}{:02X}{alpha:02X}", c.r, c.g, c.b),
        Err(_) => color.to_owned(),
    }
}

pub fn heading_typo(size: Option<HeadingSize>) -> TypoKey {
    match size {
        Some(HeadingSize::Sm) => TypoKey::H5,
        Some(HeadingSize::Md) | None => TypoKey::H3,
        Some(HeadingSize::Lg) => TypoKey::H2,
        Some(HeadingSize::Xl) => TypoKey::H1,
        Some(HeadingSize::Display) => TypoKey::Display,
    }
}

pub fn text_typo(size: Option<Size3>, variant: Option<TextVariant>) -> TypoKey {
    if variant == Some(TextVariant::Caption) {
        return TypoKey::Caption;
    }
    match size {
        Some(Size3::Sm) => TypoKey::BodySm,
        Some(Size3::Md) | None => TypoKey::Body,
        Some(Size3::Lg) => TypoKey::BodyLg,
    }
}

pub fn text_color(tokens: &TokenSet, variant: Option<TextVariant>) -> String {
    let key = match variant {
        Some(TextVariant::Muted | TextVariant::Caption) => "textSecondary",
        Some(TextVariant::Default) | None => "text",
    };
    tokens.color(key).to_owned()
}

/// `(background, foreground, border)` per button variant.
pub fn button_colors(
    tokens: &TokenSet,
    variant: Option<ButtonVariant>,
) -> (String, String, Option<Border>) {
    let primary = tokens.color("primary").to_owned();
    match variant.unwrap_or(ButtonVariant::Primary) {
        ButtonVariant::Primary => (primary, "#FFFFFF".to_owned(), None),
        ButtonVariant::Secondary => (
            tokens.color("secondary").to_owned(),
            "#FFFFFF".to_owned(),
            None,
        ),
        ButtonVariant::Outline => (
            "transparent".to_owned(),
            primary.clone(),
            Some(Border::solid(1.5, primary)),
        ),
        ButtonVariant::Ghost => ("transparent".to_owned(), primary, None),
        ButtonVariant::Danger => (
            tokens.color("error").to_owned(),
            "#FFFFFF".to_owned(),
            None,
        ),
    }
}

/// `(padding, type key, height)` per button size.
pub fn button_metrics(tokens: &TokenSet, size: Option<Size3>) -> (Edges, TypoKey, f64) {
    match size.unwrap_or(Size3::Md) {
        Size3::Sm => (
            Edges::symmetric(tokens.spacing("2"), tokens.spacing("3")),
            TypoKey::BodySm,
            32.0,
        ),
        Size3::Md => (
            Edges::symmetric(tokens.spacing("3"), tokens.spacing("5")),
            TypoKey::Body,
            40.0,
        ),
        Size3::Lg => (
            Edges::symmetric(tokens.spacing("4"), tokens.spacing("6")),
            TypoKey::BodyLg,
            48.0,
        ),
    }
}

/// `(background, foreground)` per badge variant.
pub fn badge_colors(tokens: &TokenSet, variant: Option<BadgeVariant>) -> (String, String) {
    let tinted = |key: &str| (tint(tokens.color(key), 0x1A), tokens.color(key).to_owned());
    match variant.unwrap_or(BadgeVariant::Default) {
        BadgeVariant::Default => (
            tokens.color("surface").to_owned(),
            tokens.color("textSecondary").to_owned(),
        ),
        BadgeVariant::Primary => tinted("primary"),
        BadgeVariant::Success => tinted("success"),
        BadgeVariant::Warning => tinted("warning"),
        BadgeVariant::Error => tinted("error"),
        BadgeVariant::Info => tinted("info"),
    }
}

/// Semantic color key of an alert variant.
pub fn alert_color_key(variant: Option<AlertVariant>) -> &'static str {
    match variant.unwrap_or(AlertVariant::Info) {
        AlertVariant::Info => "info",
        AlertVariant::Success => "success",
        AlertVariant::Warning => "warning",
        AlertVariant::Error => "error",
    }
}

/// `(background, border, shadow key)` per card variant.
pub fn card_surface(
    tokens: &TokenSet,
    variant: Option<CardVariant>,
) -> (String, Option<Border>, Option<&'static str>) {
    let border = tokens.color("border");
    match variant.unwrap_or(CardVariant::Default) {
        CardVariant::Default => (
            tokens.color("background").to_owned(),
            Some(Border::solid(1.0, border)),
            Some("sm"),
        ),
        CardVariant::Elevated => (tokens.color("background").to_owned(), None, Some("lg")),
        CardVariant::Outlined => (
            "transparent".to_owned(),
            Some(Border::solid(1.5, border)),
            None,
        ),
        CardVariant::Filled => (tokens.color("surface").to_owned(), None, None),
    }
}

/// `(background, foreground, border)` per nav variant.
pub fn nav_colors(
    tokens: &TokenSet,
    variant: Option<NavVariant>,
) -> (String, String, Option<Border>) {
    match variant.unwrap_or(NavVariant::Default) {
        NavVariant::Default => (
            tokens.color("background").to_owned(),
            tokens.color("text").to_owned(),
            Some(Border::solid(1.0, tokens.color("border"))),
        ),
        NavVariant::Transparent => (
            "transparent".to_owned(),
            tokens.color("text").to_owned(),
            None,
        ),
        NavVariant::Dark => (
            tokens.color("text").to_owned(),
            tokens.color("background").to_owned(),
            None,
        ),
    }
}

/// `(background, foreground, border)` per sidebar variant.
pub fn sidebar_colors(
    tokens: &TokenSet,
    variant: Option<SidebarVariant>,
) -> (String, String, Option<Border>) {
    match variant.unwrap_or(SidebarVariant::Default) {
        SidebarVariant::Default => (
            tokens.color("surface").to_owned(),
            tokens.color("text").to_owned(),
            Some(Border::solid(1.0, tokens.color("border"))),
        ),
        SidebarVariant::Dark => (
            tokens.color("text").to_owned(),
            tokens.color("background").to_owned(),
            None,
        ),
        SidebarVariant::Minimal => (
            "transparent".to_owned(),
            tokens.color("text").to_owned(),
            None,
        ),
    }
}

pub fn image_height(size: Option<MediaSize>) -> f64 {
    match size.unwrap_or(MediaSize::Md) {
        MediaSize::Sm => 120.0,
        MediaSize::Md => 200.0,
        MediaSize::Lg => 300.0,
        MediaSize::Xl => 400.0,
        MediaSize::Full => 480.0,
    }
}

pub fn avatar_size(size: Option<AvatarSize>) -> f64 {
    match size.unwrap_or(AvatarSize::Md) {
        AvatarSize::Xs => 24.0,
        AvatarSize::Sm => 32.0,
        AvatarSize::Md => 40.0,
        AvatarSize::Lg => 56.0,
        AvatarSize::Xl => 80.0,
    }
}

/// Chart and video heights.
pub fn media_height(size: Option<Size3>) -> f64 {
    match size.unwrap_or(Size3::Md) {
        Size3::Sm => 160.0,
        Size3::Md => 240.0,
        Size3::Lg => 320.0,
    }
}

pub fn icon_size(size: Option<Size3>) -> f64 {
    match size.unwrap_or(Size3::Md) {
        Size3::Sm => 16.0,
        Size3::Md => 24.0,
        Size3::Lg => 32.0,
    }
}

pub fn spacer_height(size: Option<SpacerSize>) -> f64 {
    match size.unwrap_or(SpacerSize::Md) {
        SpacerSize::Sm => 8.0,
        SpacerSize::Md => 16.0,
        SpacerSize::Lg => 32.0,
        SpacerSize::Xl => 48.0,
    }
}

/// Content flow and padding for container kinds, `None` for leaves.
pub fn container_flow(tokens: &TokenSet, kind: &ComponentKind) -> Option<(Display, Edges)> {
    use ComponentKind as K;
    let s = |k: &str| tokens.spacing(k);
    let column = |gap: f64| Display::flex(FlexDirection::Column, gap);
    let row = |gap: f64| Display::flex(FlexDirection::Row, gap);
    let flow = match kind {
        K::Nav => (
            Display::Flex {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                gap: s("6"),
            },
            Edges::symmetric(s("2"), s("6")),
        ),
        K::Sidebar => (column(s("2")), Edges::all(s("4"))),
        K::Footer => (column(s("4")), Edges::symmetric(s("8"), s("6"))),
        K::Form => (column(s("4")), Edges::all(s("6"))),
        K::Card => (column(s("3")), Edges::all(s("6"))),
        K::List => (column(s("2")), Edges::all(s("2"))),
        K::Tab => (row(s("2")), Edges::symmetric(s("1"), 0.0)),
        K::Accordion => (column(s("2")), Edges::all(s("4"))),
        K::Hero => (column(s("4")), Edges::symmetric(s("12"), s("6"))),
        K::Pricing => (row(s("6")), Edges::all(s("6"))),
        K::Testimonial => (column(s("3")), Edges::all(s("6"))),
        K::Timeline => (column(s("4")), Edges::all(s("4"))),
        _ => return None,
    };
    Some(flow)
}

#[cfg(test)]
#[path = "../../tests/unit/style/tables.rs"]
mod tests;
