//! Column math shared by height estimation and painting.
//!
//! Every placement goes through [`arrange`], so the painter and the estimator can never
//! disagree about where a child sits or how tall its container is.

use crate::foundation::core::{Point, Rect};
use crate::layout::estimate::{CHAR_WIDTH_RATIO, component_height};
use crate::scene::component::ComponentKind;
use crate::style::record::{Display, GridColumns, Side, TextAlign};
use crate::style::resolve::{MIN_PAGE_HEIGHT, StyledComponent, StyledScreen};

/// Result of placing a list of children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    /// Slot granted to each child, as tall as the child.
    pub slots: Vec<Rect>,
    /// Painted box of each child inside its slot.
    pub boxes: Vec<Rect>,
    /// Content height, without the container's padding.
    pub height: f64,
}

/// Width of each of `n` equal columns separated by `gap`.
pub fn column_width(inner_width: f64, n: usize, gap: f64) -> f64 {
    if n == 0 {
        return inner_width;
    }
    let n = n as f64;
    ((inner_width - gap * (n - 1.0)) / n).max(0.0)
}

/// Column count of a grid `inner_width` wide. Auto-fit grids do not depend on how many
/// children they hold; a short last row simply leaves its trailing tracks empty.
pub fn grid_column_count(columns: GridColumns, inner_width: f64) -> usize {
    match columns {
        GridColumns::Repeat(n) => (n as usize).max(1),
        GridColumns::AutoFit { min } if min > 0.0 => ((inner_width / min).floor() as usize).max(1),
        GridColumns::AutoFit { .. } => 1,
        GridColumns::Halves | GridColumns::Sidebar { .. } => 2,
    }
}

/// Natural width of content-sized kinds.
fn intrinsic_width(c: &StyledComponent) -> Option<f64> {
    match c.kind {
        ComponentKind::Button | ComponentKind::Badge => {
            let font_size = c.style.font_size_or(14.0);
            let text = c.label_str().chars().count() as f64 * font_size * CHAR_WIDTH_RATIO;
            let min = if c.kind == ComponentKind::Button { 64.0 } else { 24.0 };
            Some((text + c.style.padding_or_zero().horizontal()).max(min))
        }
        _ => None,
    }
}

/// Width of a component's box inside a slot.
pub fn box_width(c: &StyledComponent, slot_width: f64) -> f64 {
    c.style
        .width
        .map_or(slot_width, |w| w.resolve(slot_width, intrinsic_width(c)))
}

fn place_box(c: &StyledComponent, slot: Rect) -> Rect {
    let w = box_width(c, slot.width());
    let dx = match c.style.text_align {
        Some(TextAlign::Center) => (slot.width() - w) / 2.0,
        Some(TextAlign::Right) => slot.width() - w,
        Some(TextAlign::Left) | None => 0.0,
    };
    Rect::new(slot.x0 + dx, slot.y0, slot.x0 + dx + w, slot.y1)
}

/// Place `children` in a content box starting at `origin` and `inner_width` wide.
pub fn arrange(
    display: Display,
    origin: Point,
    inner_width: f64,
    children: &[StyledComponent],
) -> Arrangement {
    let mut out = Arrangement::default();
    if children.is_empty() {
        return out;
    }
    match display {
        Display::Block => stack(&mut out, origin, inner_width, 0.0, children),
        Display::Flex { gap, .. } if display.is_row() => {
            let w = column_width(inner_width, children.len(), gap);
            let heights: Vec<f64> = children.iter().map(|c| component_height(c, w)).collect();
            let row_h = heights.iter().copied().fold(0.0, f64::max);
            for (i, (c, h)) in children.iter().zip(&heights).enumerate() {
                let x = origin.x + i as f64 * (w + gap);
                let slot = Rect::new(x, origin.y, x + w, origin.y + row_h);
                let dy = (row_h - h) / 2.0;
                let b = place_box(c, slot);
                out.slots.push(slot);
                out.boxes
                    .push(Rect::new(b.x0, origin.y + dy, b.x1, origin.y + dy + h));
            }
            out.height = row_h;
        }
        Display::Flex { gap, .. } => stack(&mut out, origin, inner_width, gap, children),
        Display::Grid {
            grid_template_columns: GridColumns::Sidebar { side, width },
            gap,
        } => sidebar(&mut out, origin, inner_width, side, width, gap, children),
        Display::Grid {
            grid_template_columns,
            gap,
        } => {
            let cols = grid_column_count(grid_template_columns, inner_width);
            let w = column_width(inner_width, cols, gap);
            // Offsets accumulate from zero so the height does not depend on the origin.
            let mut dy = 0.0;
            for (row, chunk) in children.chunks(cols).enumerate() {
                if row > 0 {
                    dy += gap;
                }
                let heights: Vec<f64> = chunk.iter().map(|c| component_height(c, w)).collect();
                let row_h = heights.iter().copied().fold(0.0, f64::max);
                let y = origin.y + dy;
                for (i, (c, h)) in chunk.iter().zip(&heights).enumerate() {
                    let x = origin.x + i as f64 * (w + gap);
                    push_top_aligned(&mut out, c, Rect::new(x, y, x + w, y + h));
                }
                dy += row_h;
            }
            out.height = dy;
        }
    }
    out
}

fn push_top_aligned(out: &mut Arrangement, c: &StyledComponent, slot: Rect) {
    out.boxes.push(place_box(c, slot));
    out.slots.push(slot);
}

fn stack(
    out: &mut Arrangement,
    origin: Point,
    inner_width: f64,
    gap: f64,
    children: &[StyledComponent],
) {
    let mut dy = 0.0;
    for (i, c) in children.iter().enumerate() {
        if i > 0 {
            dy += gap;
        }
        let h = component_height(c, inner_width);
        let y = origin.y + dy;
        push_top_aligned(out, c, Rect::new(origin.x, y, origin.x + inner_width, y + h));
        dy += h;
    }
    out.height = dy;
}

/// Sidebar grid: one child in the narrow column, the rest stacked in the main column.
fn sidebar(
    out: &mut Arrangement,
    origin: Point,
    inner_width: f64,
    side: Side,
    side_width: f64,
    gap: f64,
    children: &[StyledComponent],
) {
    let side_w = side_width.min(inner_width);
    let main_w = (inner_width - side_w - gap).max(0.0);
    let (side_x, main_x) = match side {
        Side::Left => (origin.x, origin.x + side_w + gap),
        Side::Right => (origin.x + main_w + gap, origin.x),
    };
    let side_index = match side {
        Side::Left => 0,
        Side::Right => children.len() - 1,
    };

    let mut main_dy = 0.0;
    let mut main_count = 0usize;
    let mut side_h = 0.0f64;
    for (i, c) in children.iter().enumerate() {
        if i == side_index {
            side_h = component_height(c, side_w);
            push_top_aligned(
                out,
                c,
                Rect::new(side_x, origin.y, side_x + side_w, origin.y + side_h),
            );
            continue;
        }
        if main_count > 0 {
            main_dy += gap;
        }
        let h = component_height(c, main_w);
        let y = origin.y + main_dy;
        push_top_aligned(out, c, Rect::new(main_x, y, main_x + main_w, y + h));
        main_dy += h;
        main_count += 1;
    }
    out.height = side_h.max(main_dy);
}

/// Content height of `children` arranged with `display`.
pub fn measure(display: Display, inner_width: f64, children: &[StyledComponent]) -> f64 {
    arrange(display, Point::ORIGIN, inner_width, children).height
}

/// One non-empty section placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlacement {
    /// Index into the screen's sections.
    pub index: usize,
    /// Full section band including padding.
    pub rect: Rect,
    pub content: Arrangement,
}

/// Sections of a screen stacked top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPlacement {
    pub sections: Vec<SectionPlacement>,
    /// Page height, floored at the minimum page height.
    pub height: f64,
}

/// Place every non-empty section of `screen` on a page `viewport_width` wide.
pub fn place_screen(screen: &StyledScreen, viewport_width: f64) -> ScreenPlacement {
    let mut y = 0.0;
    let mut sections = Vec::new();
    for (index, section) in screen.sections.iter().enumerate() {
        if section.components.is_empty() {
            continue;
        }
        let padding = section.style.padding_or_zero();
        let display = section.style.display.unwrap_or(Display::Block);
        let inner = (viewport_width - padding.horizontal()).max(0.0);
        let content = arrange(
            display,
            Point::new(padding.left, y + padding.top),
            inner,
            &section.components,
        );
        let h = content.height + padding.vertical();
        sections.push(SectionPlacement {
            index,
            rect: Rect::new(0.0, y, viewport_width, y + h),
            content,
        });
        y += h;
    }
    ScreenPlacement {
        sections,
        height: y.max(screen.style.min_height.unwrap_or(MIN_PAGE_HEIGHT)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
