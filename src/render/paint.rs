use crate::foundation::core::{BezPath, Point, Rect, Rgba8};
use crate::tokens::color::{ColorKind, classify};
use serde::Serialize;

/// Substitute for `rgb()`/`rgba()`/`hsl()` colors and unparseable values.
pub const FALLBACK_FUNCTION_COLOR: Rgba8 = Rgba8::opaque(0x94, 0xA3, 0xB8);

/// Substitute for gradient fills.
pub const FALLBACK_GRADIENT_COLOR: Rgba8 = Rgba8::opaque(0xF8, 0xFA, 0xFC);

/// Paint color for a style value. `None` means nothing is painted.
pub fn paint_color(value: &str) -> Option<Rgba8> {
    match classify(value) {
        ColorKind::Hex(c) | ColorKind::Keyword(c) => (!c.is_transparent()).then_some(c),
        ColorKind::Function => Some(FALLBACK_FUNCTION_COLOR),
        ColorKind::Gradient => Some(FALLBACK_GRADIENT_COLOR),
        ColorKind::Invalid => {
            tracing::warn!(color = value, "unpaintable color, using fallback");
            Some(FALLBACK_FUNCTION_COLOR)
        }
    }
}

/// Stroke color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Rectangle with rounded corners. The radius never exceeds half the shorter side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundedRect {
    rect: Rect,
    radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<Rgba8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stroke: Option<Stroke>,
}

impl RoundedRect {
    /// Normalizes `rect` and clamps `radius` to `[0, min(w/2, h/2)]`; non-finite radii become 0.
    pub fn new(rect: Rect, radius: f64, fill: Option<Rgba8>, stroke: Option<Stroke>) -> Self {
        let rect = rect.abs();
        let max = (rect.width() / 2.0).min(rect.height() / 2.0);
        let radius = if radius.is_finite() {
            radius.clamp(0.0, max.max(0.0))
        } else {
            0.0
        };
        Self {
            rect,
            radius,
            fill,
            stroke,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fill(&self) -> Option<Rgba8> {
        self.fill
    }

    pub fn stroke(&self) -> Option<Stroke> {
        self.stroke
    }
}

/// One drawing primitive in absolute page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PaintCmd {
    Rect {
        rect: Rect,
        fill: Rgba8,
    },
    RoundedRect(RoundedRect),
    Circle {
        center: Point,
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Rgba8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Path {
        path: BezPath,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Rgba8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Single line of text; `origin` is on the baseline.
    Text {
        origin: Point,
        text: String,
        size: f64,
        weight: u16,
        color: Rgba8,
        anchor: TextAnchor,
    },
}

impl PaintCmd {
    /// Rounded rectangle with the radius clamped to `min(r, w/2, h/2)`.
    pub fn rounded_rect(
        rect: Rect,
        radius: f64,
        fill: Option<Rgba8>,
        stroke: Option<Stroke>,
    ) -> Self {
        Self::RoundedRect(RoundedRect::new(rect, radius, fill, stroke))
    }

    /// Bounding box of the primitive, used for page sanity checks.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { rect, .. } => *rect,
            Self::RoundedRect(r) => r.rect(),
            Self::Circle { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Self::Line { from, to, .. } => Rect::from_points(*from, *to),
            Self::Path { path, .. } => kurbo::Shape::bounding_box(path),
            Self::Text { origin, size, .. } => {
                Rect::new(origin.x, origin.y - size, origin.x, origin.y)
            }
        }
    }
}

/// One painted screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub screen: String,
    pub width: f64,
    pub height: f64,
    pub background: Rgba8,
    /// CSS font-family list used for every text command.
    pub font_family: String,
    pub commands: Vec<PaintCmd>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
