use crate::layout::flow::{self, box_width};
use crate::scene::component::ComponentKind;
use crate::style::record::Display;
use crate::style::resolve::{MIN_PAGE_HEIGHT, StyledComponent, StyledScreen, StyledSection};

/// Average glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Line box height as a multiple of the font size for wrapped text.
pub const TEXT_LINE_RATIO: f64 = 1.5;

/// Leading added to every wrapped line.
pub const TEXT_PAD: f64 = 8.0;

/// Space reserved above input-like fields for their label.
pub const FIELD_LABEL_HEIGHT: f64 = 20.0;

/// Default height per kind, used when nothing more specific applies.
pub fn base_height(kind: &ComponentKind) -> f64 {
    use ComponentKind as K;
    match kind {
        K::Nav => 56.0,
        K::Heading => 32.0,
        K::Text => 24.0,
        K::Button => 40.0,
        K::Input => 40.0,
        K::Textarea => 96.0,
        K::Select => 40.0,
        K::Checkbox | K::Radio | K::Toggle => 24.0,
        K::Slider => 32.0,
        K::SearchBar => 40.0,
        K::DatePicker => 40.0,
        K::Link => 20.0,
        K::Badge => 24.0,
        K::Alert => 56.0,
        K::Breadcrumb => 20.0,
        K::Stat => 88.0,
        K::Icon => 24.0,
        K::Map => 240.0,
        K::Image => 200.0,
        K::Avatar => 40.0,
        K::Video | K::Chart => 240.0,
        K::Card => 160.0,
        K::List => 120.0,
        K::Table => 200.0,
        K::Tab => 48.0,
        K::Accordion => 56.0,
        K::Form => 200.0,
        K::Sidebar => 400.0,
        K::Footer => 120.0,
        K::Hero => 320.0,
        K::Pricing => 360.0,
        K::Testimonial => 180.0,
        K::Timeline => 200.0,
        K::ProgressBar => 24.0,
        K::Stepper => 56.0,
        K::Pagination => 40.0,
        K::Divider => 1.0,
        K::Spacer => 16.0,
        K::Modal => 240.0,
        K::Unknown(_) => 40.0,
    }
}

/// Height of one wrapped line, leading included.
pub fn line_height(font_size: f64) -> f64 {
    font_size * TEXT_LINE_RATIO + TEXT_PAD
}

/// Height of wrapped text in a box `width` wide.
pub fn text_height(text: &str, font_size: f64, width: f64) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let per_line = (width / (font_size * CHAR_WIDTH_RATIO)).floor().max(1.0);
    let lines = (len as f64 / per_line).ceil();
    lines * line_height(font_size)
}

/// Height of a component placed in a slot `slot_width` wide.
pub fn component_height(c: &StyledComponent, slot_width: f64) -> f64 {
    let base = base_height(&c.kind);
    let floor = c.style.min_height.unwrap_or(0.0);
    let width = box_width(c, slot_width);

    if !c.children.is_empty() {
        let padding = c.style.padding_or_zero();
        let display = c.style.display.unwrap_or(Display::Block);
        let inner = (width - padding.horizontal()).max(0.0);
        let content = flow::measure(display, inner, &c.children);
        return (content + padding.vertical()).max(base).max(floor);
    }

    let h = match c.kind {
        ComponentKind::Heading | ComponentKind::Text => {
            let padding = c.style.padding_or_zero();
            let font_size = c.style.font_size_or(16.0);
            let inner = (width - padding.horizontal()).max(0.0);
            text_height(c.label_str(), font_size, inner).max(base)
        }
        _ => {
            let own = c.style.height.unwrap_or(base);
            if c.kind.is_field() && c.label.is_some() {
                own + FIELD_LABEL_HEIGHT
            } else {
                own
            }
        }
    };
    h.max(floor)
}

/// Section height: arranged content plus vertical padding, zero when empty.
pub fn section_height(section: &StyledSection, viewport_width: f64) -> f64 {
    if section.components.is_empty() {
        return 0.0;
    }
    let padding = section.style.padding_or_zero();
    let display = section.style.display.unwrap_or(Display::Block);
    let inner = (viewport_width - padding.horizontal()).max(0.0);
    flow::measure(display, inner, &section.components) + padding.vertical()
}

/// Screen height: sum of section heights, floored at the minimum page height.
pub fn screen_height(screen: &StyledScreen, viewport_width: f64) -> f64 {
    let sum: f64 = screen
        .sections
        .iter()
        .map(|s| section_height(s, viewport_width))
        .sum();
    sum.max(screen.style.min_height.unwrap_or(MIN_PAGE_HEIGHT))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/estimate.rs"]
mod tests;
