use crate::foundation::core::Rgba8;

/// Coarse classification of a color string as it appears in tokens and styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    Hex(Rgba8),
    /// `linear-gradient(...)` / `radial-gradient(...)`.
    Gradient,
    /// `rgb()`, `rgba()`, `hsl()`, `hsla()`.
    Function,
    /// Named keyword (`transparent`, `white`, `black`).
    Keyword(Rgba8),
    /// Anything else.
    Invalid,
}

/// Classify a CSS-like color string.
pub fn classify(s: &str) -> ColorKind {
    let s = s.trim();
    if s.starts_with('#') {
        return match parse_hex(s) {
            Ok(c) => ColorKind::Hex(c),
            Err(_) => ColorKind::Invalid,
        };
    }
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("linear-gradient(") || lower.starts_with("radial-gradient(") {
        return ColorKind::Gradient;
    }
    if ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return ColorKind::Function;
    }
    match lower.as_str() {
        "transparent" => ColorKind::Keyword(Rgba8::transparent()),
        "white" => ColorKind::Keyword(Rgba8::opaque(255, 255, 255)),
        "black" => ColorKind::Keyword(Rgba8::opaque(0, 0, 0)),
        _ => ColorKind::Invalid,
    }
}

/// Return `true` for a well-formed hex color.
pub fn is_hex(s: &str) -> bool {
    matches!(classify(s), ColorKind::Hex(_))
}

/// Return `true` for a gradient function.
pub fn is_gradient(s: &str) -> bool {
    matches!(classify(s), ColorKind::Gradient)
}

/// Return `true` for `rgb()`/`rgba()`/`hsl()`/`hsla()` notation.
pub fn is_alpha_function(s: &str) -> bool {
    matches!(classify(s), ColorKind::Function)
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
pub fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, ch) in s.chars().enumerate() {
                let v = hex_byte(&ch.to_string())?;
                out[i] = v * 17;
            }
            Ok(Rgba8::opaque(out[0], out[1], out[2]))
        }
        6 => Ok(Rgba8::opaque(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/color.rs"]
mod tests;
