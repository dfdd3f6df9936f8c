//! Built-in token tables.

/// Semantic color keys every complete palette must define.
pub const REQUIRED_COLOR_KEYS: [&str; 11] = [
    "primary",
    "secondary",
    "background",
    "surface",
    "text",
    "textSecondary",
    "border",
    "error",
    "success",
    "warning",
    "info",
];

pub(crate) const LIGHT_PALETTE: &[(&str, &str)] = &[
    ("primary", "#3B82F6"),
    ("secondary", "#8B5CF6"),
    ("background", "#FFFFFF"),
    ("surface", "#F8FAFC"),
    ("text", "#0F172A"),
    ("textSecondary", "#64748B"),
    ("border", "#E2E8F0"),
    ("error", "#EF4444"),
    ("success", "#22C55E"),
    ("warning", "#F59E0B"),
    ("info", "#0EA5E9"),
    ("accent", "#EC4899"),
];

pub(crate) const DARK_PALETTE: &[(&str, &str)] = &[
    ("primary", "#60A5FA"),
    ("secondary", "#A78BFA"),
    ("background", "#0F172A"),
    ("surface", "#1E293B"),
    ("text", "#F8FAFC"),
    ("textSecondary", "#94A3B8"),
    ("border", "#334155"),
    ("error", "#F87171"),
    ("success", "#4ADE80"),
    ("warning", "#FBBF24"),
    ("info", "#38BDF8"),
    ("accent", "#F472B6"),
];

pub(crate) const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// `(key, size px, line-height ratio, weight, letter-spacing em)`.
pub(crate) const TYPE_SCALE: &[(&str, f64, f64, u16, f64)] = &[
    ("display", 48.0, 1.1, 800, -0.02),
    ("h1", 36.0, 1.2, 700, -0.02),
    ("h2", 30.0, 1.25, 700, -0.01),
    ("h3", 24.0, 1.3, 600, 0.0),
    ("h4", 20.0, 1.4, 600, 0.0),
    ("h5", 18.0, 1.4, 600, 0.0),
    ("h6", 16.0, 1.5, 600, 0.0),
    ("bodyLg", 18.0, 1.6, 400, 0.0),
    ("body", 16.0, 1.6, 400, 0.0),
    ("bodySm", 14.0, 1.5, 400, 0.0),
    ("caption", 12.0, 1.4, 400, 0.0),
    ("overline", 11.0, 1.4, 600, 0.08),
];

pub(crate) const SPACING_UNIT: f64 = 4.0;

/// Spacing scale keys; each resolves to `key * unit`.
pub(crate) const SPACING_KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24",
];

pub(crate) const RADII: &[(&str, f64)] = &[
    ("none", 0.0),
    ("sm", 4.0),
    ("md", 8.0),
    ("lg", 12.0),
    ("xl", 16.0),
    ("2xl", 24.0),
    ("full", 9999.0),
];

pub(crate) const SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px rgba(15, 23, 42, 0.06)"),
    (
        "md",
        "0 4px 6px -1px rgba(15, 23, 42, 0.08), 0 2px 4px -2px rgba(15, 23, 42, 0.06)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgba(15, 23, 42, 0.10), 0 4px 6px -4px rgba(15, 23, 42, 0.08)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgba(15, 23, 42, 0.12), 0 8px 10px -6px rgba(15, 23, 42, 0.08)",
    ),
];
