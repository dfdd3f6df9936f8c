use crate::foundation::core::Rgba8;
use crate::render::paint::{Page, PaintCmd, Stroke, TextAnchor};
use std::fmt::Write as _;

fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { "0".to_owned() } else { format!("{r}") }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn fill_attrs(fill: Option<Rgba8>) -> String {
    match fill {
        None => r#" fill="none""#.to_owned(),
        Some(c) if c.a == 255 => format!(r#" fill="{}""#, c.to_hex()),
        Some(c) => format!(
            r#" fill="{}" fill-opacity="{}""#,
            Rgba8 { a: 255, ..c }.to_hex(),
            num(c.opacity())
        ),
    }
}

fn stroke_attrs(stroke: Option<Stroke>) -> String {
    let Some(s) = stroke else {
        return String::new();
    };
    let mut out = format!(
        r#" stroke="{}" stroke-width="{}""#,
        Rgba8 { a: 255, ..s.color }.to_hex(),
        num(s.width)
    );
    if s.color.a != 255 {
        let _ = write!(out, r#" stroke-opacity="{}""#, num(s.color.opacity()));
    }
    out
}

impl Page {
    /// Serialize the page as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (num(self.width), num(self.height));
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(out, "<title>{}</title>", escape(&self.screen));
        let _ = writeln!(
            out,
            r#"<rect x="0" y="0" width="{w}" height="{h}"{}/>"#,
            fill_attrs(Some(self.background))
        );
        let _ = writeln!(
            out,
            r#"<g font-family="{}">"#,
            escape(&self.font_family)
        );
        for cmd in &self.commands {
            write_cmd(&mut out, cmd);
        }
        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn write_cmd(out: &mut String, cmd: &PaintCmd) {
    let _ = match cmd {
        PaintCmd::Rect { rect, fill } => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            fill_attrs(Some(*fill))
        ),
        PaintCmd::RoundedRect(r) => {
            let rect = r.rect();
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}{}/>"#,
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height()),
                num(r.radius()),
                fill_attrs(r.fill()),
                stroke_attrs(r.stroke())
            )
        }
        PaintCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            fill_attrs(*fill),
            stroke_attrs(*stroke)
        ),
        PaintCmd::Line { from, to, stroke } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            stroke_attrs(Some(*stroke))
        ),
        PaintCmd::Path { path, fill, stroke } => writeln!(
            out,
            r#"<path d="{}"{}{} stroke-linejoin="round"/>"#,
            path.to_svg(),
            fill_attrs(*fill),
            stroke_attrs(*stroke)
        ),
        PaintCmd::Text {
            origin,
            text,
            size,
            weight,
            color,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-weight="{weight}" text-anchor="{anchor}"{}>{}</text>"#,
                num(origin.x),
                num(origin.y),
                num(*size),
                fill_attrs(Some(*color)),
                escape(text)
            )
        }
    };
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
