use crate::foundation::core::{BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{WirecraftError, WirecraftResult};
use crate::foundation::math::{SplitMix64, derive_seed};
use crate::layout::estimate::{CHAR_WIDTH_RATIO, FIELD_LABEL_HEIGHT, line_height};
use crate::layout::flow::{arrange, place_screen};
use crate::render::paint::{
    FALLBACK_FUNCTION_COLOR, Page, PaintCmd, Stroke, TextAnchor, paint_color,
};
use crate::scene::component::{ChartType, ComponentKind, Props, Trend};
use crate::style::record::{Display, StyleRecord, TextAlign};
use crate::style::resolve::{StyledComponent, StyledScreen};
use crate::style::tables::alert_color_key;
use crate::tokens::set::TokenSet;
use kurbo::{CircleSegment, Shape};

/// Pages taller than this are rejected instead of allocated.
pub const MAX_PAGE_HEIGHT: f64 = 1_000_000.0;

const WHITE: Rgba8 = Rgba8::opaque(0xFF, 0xFF, 0xFF);

struct Painter<'a> {
    tokens: &'a TokenSet,
    screen: &'a str,
    seed: u64,
    out: Vec<PaintCmd>,
}

/// Split `text` into lines using the same character budget as height estimation.
pub fn wrap_lines(text: &str, font_size: f64, width: f64) -> Vec<String> {
    let per_line = (width / (font_size * CHAR_WIDTH_RATIO)).floor().max(1.0) as usize;
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(per_line)
        .map(|chunk| chunk.iter().collect::<String>().trim().to_owned())
        .collect()
}

fn initials(label: &str) -> String {
    let s: String = label
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if s.is_empty() { "?".to_owned() } else { s }
}

fn with_alpha(c: Rgba8, a: u8) -> Rgba8 {
    Rgba8 { a, ..c }
}

impl<'a> Painter<'a> {
    fn token(&self, key: &str) -> Rgba8 {
        paint_color(self.tokens.color(key)).unwrap_or(FALLBACK_FUNCTION_COLOR)
    }

    fn fill_of(&self, style: &StyleRecord) -> Option<Rgba8> {
        style
            .background_color
            .as_deref()
            .or(style.background_image.as_deref())
            .and_then(paint_color)
    }

    fn fg(&self, style: &StyleRecord) -> Rgba8 {
        style
            .color
            .as_deref()
            .and_then(paint_color)
            .unwrap_or_else(|| self.token("text"))
    }

    fn stroke_of(&self, style: &StyleRecord) -> Option<Stroke> {
        let border = style.border.as_ref()?;
        Some(Stroke {
            width: border.width,
            color: paint_color(&border.color)?,
        })
    }

    fn thin(&self, key: &str) -> Stroke {
        Stroke {
            width: 1.0,
            color: self.token(key),
        }
    }

    fn paint_box(&mut self, style: &StyleRecord, rect: Rect) {
        let fill = self.fill_of(style);
        let stroke = self.stroke_of(style);
        if fill.is_none() && stroke.is_none() {
            return;
        }
        self.out.push(PaintCmd::rounded_rect(
            rect,
            style.border_radius.unwrap_or(0.0),
            fill,
            stroke,
        ));
    }

    fn text(&mut self, origin: Point, text: &str, size: f64, weight: u16, color: Rgba8) {
        self.anchored(origin, text, size, weight, color, TextAnchor::Start);
    }

    fn anchored(
        &mut self,
        origin: Point,
        text: &str,
        size: f64,
        weight: u16,
        color: Rgba8,
        anchor: TextAnchor,
    ) {
        if text.is_empty() {
            return;
        }
        self.out.push(PaintCmd::Text {
            origin,
            text: text.to_owned(),
            size,
            weight,
            color,
            anchor,
        });
    }

    fn centered_text(&mut self, rect: Rect, text: &str, size: f64, weight: u16, color: Rgba8) {
        let c = rect.center();
        self.anchored(
            Point::new(c.x, c.y + size * 0.35),
            text,
            size,
            weight,
            color,
            TextAnchor::Middle,
        );
    }

    fn font(&self, c: &StyledComponent, fallback: f64) -> (f64, u16) {
        c.style
            .font
            .as_ref()
            .map_or((fallback, 400), |f| (f.font_size, f.font_weight))
    }

    fn draw(&mut self, c: &StyledComponent, rect: Rect, path: &str) {
        use ComponentKind as K;
        if !c.children.is_empty() {
            self.container(c, rect, path);
            return;
        }
        match &c.kind {
            K::Button => self.button(c, rect),
            K::Input | K::Textarea | K::SearchBar | K::DatePicker | K::Select => {
                self.field(c, rect)
            }
            K::Checkbox | K::Radio | K::Toggle => self.toggle(c, rect),
            K::Slider => self.slider(c, rect),
            K::Chart => self.chart(c, rect, path),
            K::Avatar => self.avatar(c, rect),
            K::Image | K::Video | K::Map => self.media(c, rect),
            K::Badge => self.badge(c, rect),
            K::Alert => self.alert(c, rect),
            K::ProgressBar => self.progress(c, rect),
            K::Stepper => self.stepper(c, rect),
            K::Pagination => self.pagination(c, rect),
            K::Divider => {
                let fill = self.fill_of(&c.style).unwrap_or_else(|| self.token("border"));
                self.out.push(PaintCmd::Rect { rect, fill });
            }
            K::Table => self.table(c, rect),
            K::Icon => {
                let r = (rect.width().min(rect.height()) / 2.0 - 2.0).max(1.0);
                let color = self.fg(&c.style);
                self.out.push(PaintCmd::Circle {
                    center: rect.center(),
                    radius: r,
                    fill: None,
                    stroke: Some(Stroke { width: 2.0, color }),
                });
            }
            K::Stat => self.stat(c, rect),
            K::Heading | K::Text | K::Link => self.paragraph(c, rect),
            K::Nav | K::Sidebar | K::List | K::Tab | K::Breadcrumb => self.items(c, rect),
            K::Spacer => {}
            K::Footer
            | K::Form
            | K::Card
            | K::Accordion
            | K::Hero
            | K::Pricing
            | K::Testimonial
            | K::Timeline
            | K::Modal
            | K::Unknown(_) => self.generic(c, rect),
        }
    }

    fn container(&mut self, c: &StyledComponent, rect: Rect, path: &str) {
        self.paint_box(&c.style, rect);
        let padding = c.style.padding_or_zero();
        let display = c.style.display.unwrap_or(Display::Block);
        let placed = arrange(
            display,
            Point::new(rect.x0 + padding.left, rect.y0 + padding.top),
            (rect.width() - padding.horizontal()).max(0.0),
            &c.children,
        );
        for (i, (child, b)) in c.children.iter().zip(&placed.boxes).enumerate() {
            self.draw(child, *b, &format!("{path}/{i}"));
        }
    }

    fn generic(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let (size, weight) = self.font(c, 14.0);
        let color = match c.style.color.as_deref() {
            Some(_) => self.fg(&c.style),
            None => self.token("textSecondary"),
        };
        self.centered_text(rect, c.label_str(), size, weight, color);
    }

    fn button(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let (size, weight) = self.font(c, 16.0);
        let fg = self.fg(&c.style);
        self.centered_text(rect, c.label_str(), size, weight, fg);
    }

    fn field(&mut self, c: &StyledComponent, rect: Rect) {
        let mut field = rect;
        if let Some(label) = c.label.as_deref() {
            let color = self.token("text");
            self.text(Point::new(rect.x0, rect.y0 + 14.0), label, 13.0, 500, color);
            field.y0 = (field.y0 + FIELD_LABEL_HEIGHT).min(field.y1);
        }
        self.paint_box(&c.style, field);

        let (size, _) = self.font(c, 16.0);
        let pad = c.style.padding_or_zero();
        let muted = self.token("textSecondary");
        let mut text_x = field.x0 + pad.left;
        let placeholder = match &c.props {
            Props::Input(p) => p.placeholder.clone(),
            Props::Select(p) => p.placeholder.clone().or_else(|| p.options.first().cloned()),
            _ => None,
        };
        let default = match c.kind {
            ComponentKind::SearchBar => "Search…",
            ComponentKind::Select => "Select…",
            ComponentKind::DatePicker => "mm/dd/yyyy",
            _ => "",
        };
        let cy = field.center().y;

        match c.kind {
            ComponentKind::SearchBar => {
                self.out.push(PaintCmd::Circle {
                    center: Point::new(text_x + 6.0, cy - 1.0),
                    radius: 6.0,
                    fill: None,
                    stroke: Some(Stroke {
                        width: 1.5,
                        color: muted,
                    }),
                });
                text_x += 20.0;
            }
            ComponentKind::Select => {
                let x = field.x1 - pad.right - 6.0;
                let mut chevron = BezPath::new();
                chevron.move_to((x - 5.0, cy - 2.5));
                chevron.line_to((x, cy + 2.5));
                chevron.line_to((x + 5.0, cy - 2.5));
                self.out.push(PaintCmd::Path {
                    path: chevron,
                    fill: None,
                    stroke: Some(Stroke {
                        width: 1.5,
                        color: muted,
                    }),
                });
            }
            ComponentKind::DatePicker => {
                let x = field.x1 - pad.right - 16.0;
                self.out.push(PaintCmd::rounded_rect(
                    Rect::new(x, cy - 7.0, x + 14.0, cy + 7.0),
                    2.0,
                    None,
                    Some(Stroke {
                        width: 1.5,
                        color: muted,
                    }),
                ));
            }
            _ => {}
        }

        let baseline = if c.kind == ComponentKind::Textarea {
            field.y0 + 12.0 + size
        } else {
            cy + size * 0.35
        };
        let text = placeholder.as_deref().unwrap_or(default);
        self.text(Point::new(text_x, baseline), text, size, 400, muted);
    }

    fn toggle(&mut self, c: &StyledComponent, rect: Rect) {
        let checked = matches!(&c.props, Props::Toggle(t) if t.checked);
        let accent = self.fg(&c.style);
        let border = self.thin("border");
        let cy = rect.center().y;
        let label_x = match c.kind {
            ComponentKind::Radio => {
                self.out.push(PaintCmd::Circle {
                    center: Point::new(rect.x0 + 8.0, cy),
                    radius: 8.0,
                    fill: Some(WHITE),
                    stroke: Some(if checked {
                        Stroke {
                            width: 1.5,
                            color: accent,
                        }
                    } else {
                        border
                    }),
                });
                if checked {
                    self.out.push(PaintCmd::Circle {
                        center: Point::new(rect.x0 + 8.0, cy),
                        radius: 4.0,
                        fill: Some(accent),
                        stroke: None,
                    });
                }
                rect.x0 + 24.0
            }
            ComponentKind::Toggle => {
                let track = Rect::new(rect.x0, cy - 10.0, rect.x0 + 36.0, cy + 10.0);
                let track_fill = if checked { accent } else { self.token("border") };
                self.out
                    .push(PaintCmd::rounded_rect(track, 10.0, Some(track_fill), None));
                let knob_x = if checked { track.x1 - 10.0 } else { track.x0 + 10.0 };
                self.out.push(PaintCmd::Circle {
                    center: Point::new(knob_x, cy),
                    radius: 8.0,
                    fill: Some(WHITE),
                    stroke: None,
                });
                rect.x0 + 44.0
            }
            _ => {
                let bx = Rect::new(rect.x0, cy - 8.0, rect.x0 + 16.0, cy + 8.0);
                if checked {
                    self.out
                        .push(PaintCmd::rounded_rect(bx, 4.0, Some(accent), None));
                    let mut tick = BezPath::new();
                    tick.move_to((bx.x0 + 4.0, cy));
                    tick.line_to((bx.x0 + 7.0, cy + 3.0));
                    tick.line_to((bx.x0 + 12.0, cy - 3.0));
                    self.out.push(PaintCmd::Path {
                        path: tick,
                        fill: None,
                        stroke: Some(Stroke {
                            width: 2.0,
                            color: WHITE,
                        }),
                    });
                } else {
                    self.out
                        .push(PaintCmd::rounded_rect(bx, 4.0, Some(WHITE), Some(border)));
                }
                rect.x0 + 24.0
            }
        };
        let (size, weight) = self.font(c, 16.0);
        let color = self.token("text");
        self.text(
            Point::new(label_x, cy + size * 0.35),
            c.label_str(),
            size,
            weight,
            color,
        );
    }

    fn slider(&mut self, c: &StyledComponent, rect: Rect) {
        let (min, max, value) = match &c.props {
            Props::Slider(p) => (
                p.min.unwrap_or(0.0),
                p.max.unwrap_or(100.0),
                p.value.unwrap_or(50.0),
            ),
            _ => (0.0, 100.0, 50.0),
        };
        let frac = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let cy = rect.center().y;
        let knob_r = 8.0;
        let x0 = rect.x0 + knob_r;
        let x1 = (rect.x1 - knob_r).max(x0);
        let track = self.fill_of(&c.style).unwrap_or_else(|| self.token("border"));
        let accent = self.fg(&c.style);
        self.out.push(PaintCmd::rounded_rect(
            Rect::new(x0, cy - 2.0, x1, cy + 2.0),
            2.0,
            Some(track),
            None,
        ));
        let kx = x0 + (x1 - x0) * frac;
        if kx > x0 {
            self.out.push(PaintCmd::rounded_rect(
                Rect::new(x0, cy - 2.0, kx, cy + 2.0),
                2.0,
                Some(accent),
                None,
            ));
        }
        self.out.push(PaintCmd::Circle {
            center: Point::new(kx, cy),
            radius: knob_r,
            fill: Some(WHITE),
            stroke: Some(Stroke {
                width: 2.0,
                color: accent,
            }),
        });
    }

    fn chart(&mut self, c: &StyledComponent, rect: Rect, path: &str) {
        self.paint_box(&c.style, rect);
        let pad = c.style.padding_or_zero();
        let inner = Rect::new(
            rect.x0 + pad.left,
            rect.y0 + pad.top,
            (rect.x1 - pad.right).max(rect.x0 + pad.left),
            (rect.y1 - pad.bottom).max(rect.y0 + pad.top),
        );
        let mut rng = SplitMix64::new(derive_seed(self.seed, [self.screen, path]));
        let primary = self.fg(&c.style);
        let chart_type = match &c.props {
            Props::Chart(p) => p.chart_type.unwrap_or(ChartType::Bar),
            _ => ChartType::Bar,
        };
        let axis = self.thin("border");

        match chart_type {
            ChartType::Bar => {
                const BARS: usize = 7;
                let slot = inner.width() / BARS as f64;
                for i in 0..BARS {
                    let h = rng.range_f64(0.25, 0.95) * inner.height();
                    let x = inner.x0 + slot * (i as f64 + 0.2);
                    self.out.push(PaintCmd::rounded_rect(
                        Rect::new(x, inner.y1 - h, x + slot * 0.6, inner.y1),
                        4.0,
                        Some(primary),
                        None,
                    ));
                }
                self.axis(inner, axis);
            }
            ChartType::Line | ChartType::Area => {
                const POINTS: usize = 8;
                let step = inner.width() / (POINTS - 1) as f64;
                let pts: Vec<Point> = (0..POINTS)
                    .map(|i| {
                        Point::new(
                            inner.x0 + step * i as f64,
                            inner.y1 - rng.range_f64(0.15, 0.9) * inner.height(),
                        )
                    })
                    .collect();
                let mut line = BezPath::new();
                for (i, p) in pts.iter().enumerate() {
                    if i == 0 {
                        line.move_to(*p);
                    } else {
                        line.line_to(*p);
                    }
                }
                if chart_type == ChartType::Area {
                    let mut area = line.clone();
                    area.line_to((inner.x1, inner.y1));
                    area.line_to((inner.x0, inner.y1));
                    area.close_path();
                    self.out.push(PaintCmd::Path {
                        path: area,
                        fill: Some(with_alpha(primary, 0x33)),
                        stroke: None,
                    });
                }
                self.out.push(PaintCmd::Path {
                    path: line,
                    fill: None,
                    stroke: Some(Stroke {
                        width: 2.0,
                        color: primary,
                    }),
                });
                self.axis(inner, axis);
            }
            ChartType::Pie | ChartType::Donut => {
                const SLICES: usize = 4;
                let weights: Vec<f64> = (0..SLICES).map(|_| rng.range_f64(0.5, 1.5)).collect();
                let total: f64 = weights.iter().sum();
                let r = inner.width().min(inner.height()) / 2.0;
                let inner_r = if chart_type == ChartType::Donut {
                    r * 0.6
                } else {
                    0.0
                };
                let palette = [
                    primary,
                    self.token("secondary"),
                    self.token("accent"),
                    self.token("info"),
                ];
                let mut start = -std::f64::consts::FRAC_PI_2;
                for (i, w) in weights.iter().enumerate() {
                    let sweep = w / total * std::f64::consts::TAU;
                    let seg = CircleSegment::new(inner.center(), r, inner_r, start, sweep);
                    self.out.push(PaintCmd::Path {
                        path: seg.to_path(0.1),
                        fill: Some(palette[i % palette.len()]),
                        stroke: None,
                    });
                    start += sweep;
                }
            }
        }
    }

    fn axis(&mut self, inner: Rect, stroke: Stroke) {
        self.out.push(PaintCmd::Line {
            from: Point::new(inner.x0, inner.y1),
            to: Point::new(inner.x1, inner.y1),
            stroke,
        });
    }

    fn avatar(&mut self, c: &StyledComponent, rect: Rect) {
        let d = rect.width().min(rect.height());
        let center = rect.center();
        let fill = self.fill_of(&c.style).or_else(|| Some(self.token("surface")));
        self.out.push(PaintCmd::Circle {
            center,
            radius: d / 2.0,
            fill,
            stroke: None,
        });
        let fg = self.fg(&c.style);
        self.centered_text(
            Rect::from_center_size(center, (d, d)),
            &initials(c.label_str()),
            (d * 0.4).round(),
            600,
            fg,
        );
    }

    fn media(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let muted = self.thin("border");
        match c.kind {
            ComponentKind::Video => {
                let center = rect.center();
                let s = (rect.height() * 0.12).clamp(8.0, 32.0);
                let mut play = BezPath::new();
                play.move_to((center.x - s * 0.6, center.y - s));
                play.line_to((center.x + s, center.y));
                play.line_to((center.x - s * 0.6, center.y + s));
                play.close_path();
                let fg = self.fg(&c.style);
                self.out.push(PaintCmd::Path {
                    path: play,
                    fill: Some(fg),
                    stroke: None,
                });
            }
            ComponentKind::Map => {
                for i in 1..4 {
                    let x = rect.x0 + rect.width() * i as f64 / 4.0;
                    let y = rect.y0 + rect.height() * i as f64 / 4.0;
                    self.out.push(PaintCmd::Line {
                        from: Point::new(x, rect.y0),
                        to: Point::new(x, rect.y1),
                        stroke: muted,
                    });
                    self.out.push(PaintCmd::Line {
                        from: Point::new(rect.x0, y),
                        to: Point::new(rect.x1, y),
                        stroke: muted,
                    });
                }
                let primary = self.token("primary");
                self.out.push(PaintCmd::Circle {
                    center: rect.center(),
                    radius: 8.0,
                    fill: Some(primary),
                    stroke: Some(Stroke {
                        width: 2.0,
                        color: WHITE,
                    }),
                });
            }
            _ => {
                self.out.push(PaintCmd::Line {
                    from: Point::new(rect.x0, rect.y0),
                    to: Point::new(rect.x1, rect.y1),
                    stroke: muted,
                });
                self.out.push(PaintCmd::Line {
                    from: Point::new(rect.x1, rect.y0),
                    to: Point::new(rect.x0, rect.y1),
                    stroke: muted,
                });
                let color = self.token("textSecondary");
                self.centered_text(rect, c.label_str(), 12.0, 400, color);
            }
        }
    }

    fn badge(&mut self, c: &StyledComponent, rect: Rect) {
        let fill = self.fill_of(&c.style);
        self.out
            .push(PaintCmd::rounded_rect(rect, rect.height() / 2.0, fill, None));
        let (size, weight) = self.font(c, 12.0);
        let fg = self.fg(&c.style);
        self.centered_text(rect, c.label_str(), size, weight, fg);
    }

    fn alert(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let key = match &c.props {
            Props::Alert(v) => alert_color_key(*v),
            _ => "info",
        };
        let accent = self.token(key);
        self.out.push(PaintCmd::Rect {
            rect: Rect::new(rect.x0, rect.y0, rect.x0 + 4.0, rect.y1),
            fill: accent,
        });
        let (size, weight) = self.font(c, 14.0);
        let fg = self.fg(&c.style);
        let pad = c.style.padding_or_zero();
        self.text(
            Point::new(rect.x0 + pad.left.max(12.0), rect.center().y + size * 0.35),
            c.label_str(),
            size,
            weight,
            fg,
        );
    }

    fn progress(&mut self, c: &StyledComponent, rect: Rect) {
        let value = match &c.props {
            Props::Progress(v) => v.unwrap_or(0.0),
            _ => 0.0,
        };
        let frac = value.clamp(0.0, 100.0) / 100.0;
        let cy = rect.center().y;
        let track = Rect::new(rect.x0, cy - 4.0, rect.x1, cy + 4.0);
        let track_fill = self.fill_of(&c.style).unwrap_or_else(|| self.token("surface"));
        let border = self.thin("border");
        self.out.push(PaintCmd::rounded_rect(
            track,
            4.0,
            Some(track_fill),
            Some(border),
        ));
        if frac > 0.0 {
            let fill = self.fg(&c.style);
            self.out.push(PaintCmd::rounded_rect(
                Rect::new(track.x0, track.y0, track.x0 + track.width() * frac, track.y1),
                4.0,
                Some(fill),
                None,
            ));
        }
    }

    fn stepper(&mut self, c: &StyledComponent, rect: Rect) {
        let (steps, current) = match &c.props {
            Props::Stepper(s) if !s.steps.is_empty() => (s.steps.clone(), s.current.unwrap_or(0)),
            _ => ((1..=3).map(|i| format!("Step {i}")).collect(), 0),
        };
        let n = steps.len();
        let accent = self.fg(&c.style);
        let border = self.thin("border");
        let slot = rect.width() / n as f64;
        let cy = rect.y0 + 16.0;
        let centers: Vec<Point> = (0..n)
            .map(|i| Point::new(rect.x0 + slot * (i as f64 + 0.5), cy))
            .collect();
        for pair in centers.windows(2) {
            self.out.push(PaintCmd::Line {
                from: Point::new(pair[0].x + 12.0, cy),
                to: Point::new(pair[1].x - 12.0, cy),
                stroke: border,
            });
        }
        let (size, _) = self.font(c, 12.0);
        let muted = self.token("textSecondary");
        for (i, (center, label)) in centers.iter().zip(&steps).enumerate() {
            let done = i <= current;
            self.out.push(PaintCmd::Circle {
                center: *center,
                radius: 12.0,
                fill: Some(if done { accent } else { WHITE }),
                stroke: if done { None } else { Some(border) },
            });
            let number_color = if done { WHITE } else { muted };
            self.centered_text(
                Rect::from_center_size(*center, (24.0, 24.0)),
                &(i + 1).to_string(),
                12.0,
                600,
                number_color,
            );
            self.anchored(
                Point::new(center.x, rect.y0 + 48.0),
                label,
                size,
                400,
                muted,
                TextAnchor::Middle,
            );
        }
    }

    fn pagination(&mut self, c: &StyledComponent, rect: Rect) {
        let (total, current) = match &c.props {
            Props::Pagination(p) => (p.total.unwrap_or(5), p.current.unwrap_or(1)),
            _ => (5, 1),
        };
        let shown = total.clamp(1, 7);
        let accent = self.token("primary");
        let border = self.thin("border");
        let text = self.fg(&c.style);
        let (size, _) = self.font(c, 14.0);
        let cy = rect.center().y;
        for i in 0..shown {
            let x = rect.x0 + i as f64 * 40.0;
            if x + 32.0 > rect.x1 {
                break;
            }
            let cell = Rect::new(x, cy - 16.0, x + 32.0, cy + 16.0);
            let active = i + 1 == current;
            self.out.push(PaintCmd::rounded_rect(
                cell,
                c.style.border_radius.unwrap_or(6.0),
                Some(if active { accent } else { WHITE }),
                if active { None } else { Some(border) },
            ));
            self.centered_text(
                cell,
                &(i + 1).to_string(),
                size,
                500,
                if active { WHITE } else { text },
            );
        }
    }

    fn table(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let (columns, rows) = match &c.props {
            Props::Table(t) => (t.columns.clone(), t.rows.unwrap_or(3)),
            _ => (Vec::new(), 3),
        };
        let columns = if columns.is_empty() {
            (1..=3).map(|i| format!("Column {i}")).collect()
        } else {
            columns
        };
        const ROW_H: f64 = 40.0;
        let col_w = rect.width() / columns.len() as f64;
        let header = Rect::new(rect.x0, rect.y0, rect.x1, (rect.y0 + ROW_H).min(rect.y1));
        let surface = self.token("surface");
        self.out
            .push(PaintCmd::rounded_rect(header, 0.0, Some(surface), None));
        let (size, _) = self.font(c, 14.0);
        let fg = self.fg(&c.style);
        for (i, name) in columns.iter().enumerate() {
            let x = rect.x0 + col_w * i as f64 + 12.0;
            self.text(
                Point::new(x, header.center().y + size * 0.35),
                name,
                size,
                600,
                fg,
            );
        }
        let border = self.thin("border");
        let muted = self.token("border");
        let fitting = ((rect.height() - ROW_H) / ROW_H).floor().max(0.0) as usize;
        for r in 0..rows.min(fitting) {
            let y = rect.y0 + ROW_H * (r as f64 + 1.0);
            self.out.push(PaintCmd::Line {
                from: Point::new(rect.x0, y),
                to: Point::new(rect.x1, y),
                stroke: border,
            });
            for i in 0..columns.len() {
                let x = rect.x0 + col_w * i as f64 + 12.0;
                let w = (col_w * 0.5).max(8.0);
                self.out.push(PaintCmd::rounded_rect(
                    Rect::new(x, y + 16.0, x + w, y + 24.0),
                    4.0,
                    Some(muted),
                    None,
                ));
            }
        }
    }

    fn stat(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let pad = c.style.padding_or_zero();
        let x = rect.x0 + pad.left;
        let muted = self.token("textSecondary");
        self.text(
            Point::new(x, rect.y0 + pad.top + 12.0),
            c.label_str(),
            12.0,
            500,
            muted,
        );
        let (value, trend) = match &c.props {
            Props::Stat(s) => (s.value.clone().unwrap_or_else(|| "—".to_owned()), s.trend),
            _ => ("—".to_owned(), None),
        };
        let (size, weight) = self.font(c, 24.0);
        let fg = self.fg(&c.style);
        let baseline = rect.y0 + pad.top + 12.0 + 8.0 + size;
        self.text(Point::new(x, baseline), &value, size, weight, fg);

        let Some(trend) = trend else {
            return;
        };
        let tx = x + value.chars().count() as f64 * size * CHAR_WIDTH_RATIO + 12.0;
        let ty = baseline - size * 0.35;
        let mut arrow = BezPath::new();
        let color = match trend {
            Trend::Up => {
                arrow.move_to((tx, ty + 5.0));
                arrow.line_to((tx + 6.0, ty - 5.0));
                arrow.line_to((tx + 12.0, ty + 5.0));
                self.token("success")
            }
            Trend::Down => {
                arrow.move_to((tx, ty - 5.0));
                arrow.line_to((tx + 6.0, ty + 5.0));
                arrow.line_to((tx + 12.0, ty - 5.0));
                self.token("error")
            }
            Trend::Flat => {
                arrow.move_to((tx, ty - 2.0));
                arrow.line_to((tx + 12.0, ty - 2.0));
                arrow.line_to((tx + 12.0, ty + 2.0));
                arrow.line_to((tx, ty + 2.0));
                muted
            }
        };
        arrow.close_path();
        self.out.push(PaintCmd::Path {
            path: arrow,
            fill: Some(color),
            stroke: None,
        });
    }

    fn paragraph(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let (size, weight) = self.font(c, 16.0);
        let color = self.fg(&c.style);
        let pad = c.style.padding_or_zero();
        let inner_w = (rect.width() - pad.horizontal()).max(0.0);
        let (x, anchor) = match c.style.text_align {
            Some(TextAlign::Center) => (rect.center().x, TextAnchor::Middle),
            Some(TextAlign::Right) => (rect.x1 - pad.right, TextAnchor::End),
            Some(TextAlign::Left) | None => (rect.x0 + pad.left, TextAnchor::Start),
        };
        let step = line_height(size);
        for (i, line) in wrap_lines(c.label_str(), size, inner_w).iter().enumerate() {
            let baseline = rect.y0 + pad.top + step * i as f64 + size * 1.1;
            self.anchored(Point::new(x, baseline), line, size, weight, color, anchor);
        }
    }

    fn items(&mut self, c: &StyledComponent, rect: Rect) {
        self.paint_box(&c.style, rect);
        let items: Vec<String> = match &c.props {
            Props::Nav(p) => p.items.clone(),
            Props::Sidebar(p) => p.items.clone(),
            Props::Items(p) => p.items.clone(),
            _ => Vec::new(),
        };
        let (size, weight) = self.font(c, 14.0);
        let fg = self.fg(&c.style);
        let pad = c.style.padding_or_zero();
        let x0 = rect.x0 + pad.left.max(12.0);
        match c.kind {
            ComponentKind::Nav => {
                let cy = rect.center().y + size * 0.35;
                self.text(Point::new(x0, cy), c.label_str(), size + 2.0, 700, fg);
                let mut x = rect.x1 - pad.right.max(12.0);
                for item in items.iter().rev() {
                    self.anchored(Point::new(x, cy), item, size, weight, fg, TextAnchor::End);
                    x -= item.chars().count() as f64 * size * CHAR_WIDTH_RATIO + 24.0;
                }
            }
            ComponentKind::Tab => {
                let active = match &c.props {
                    Props::Items(p) => p.active.unwrap_or(0),
                    _ => 0,
                };
                let n = items.len().max(1) as f64;
                let w = rect.width() / n;
                let accent = self.token("primary");
                for (i, item) in items.iter().enumerate() {
                    let cell = Rect::new(
                        rect.x0 + w * i as f64,
                        rect.y0,
                        rect.x0 + w * (i as f64 + 1.0),
                        rect.y1,
                    );
                    let color = if i == active { accent } else { fg };
                    self.centered_text(cell, item, size, weight, color);
                    if i == active {
                        self.out.push(PaintCmd::Rect {
                            rect: Rect::new(cell.x0, cell.y1 - 2.0, cell.x1, cell.y1),
                            fill: accent,
                        });
                    }
                }
            }
            ComponentKind::Breadcrumb => {
                let joined = items.join("  /  ");
                let text = if joined.is_empty() { c.label_str() } else { joined.as_str() };
                self.text(
                    Point::new(rect.x0, rect.center().y + size * 0.35),
                    text,
                    size,
                    weight,
                    fg,
                );
            }
            _ => {
                let row_h = 32.0;
                let mut y = rect.y0 + pad.top.max(8.0);
                if !c.label_str().is_empty() {
                    self.text(Point::new(x0, y + size), c.label_str(), size, 600, fg);
                    y += row_h;
                }
                let bullet = self.token("textSecondary");
                for item in &items {
                    if y + row_h > rect.y1 {
                        break;
                    }
                    if c.kind == ComponentKind::List {
                        self.out.push(PaintCmd::Circle {
                            center: Point::new(x0 + 3.0, y + row_h / 2.0),
                            radius: 3.0,
                            fill: Some(bullet),
                            stroke: None,
                        });
                        self.text(
                            Point::new(x0 + 14.0, y + row_h / 2.0 + size * 0.35),
                            item,
                            size,
                            weight,
                            fg,
                        );
                    } else {
                        self.text(
                            Point::new(x0, y + row_h / 2.0 + size * 0.35),
                            item,
                            size,
                            weight,
                            fg,
                        );
                    }
                    y += row_h;
                }
            }
        }
    }
}

/// Paint one styled screen into a page `viewport_width` wide.
pub fn paint_screen(
    screen: &StyledScreen,
    tokens: &TokenSet,
    viewport_width: f64,
    chart_seed: u64,
) -> WirecraftResult<Page> {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return Err(WirecraftError::layout(format!(
            "viewport width must be positive and finite, got {viewport_width}"
        )));
    }
    let placed = place_screen(screen, viewport_width);
    if !placed.height.is_finite() || placed.height > MAX_PAGE_HEIGHT {
        return Err(WirecraftError::layout(format!(
            "screen '{}' is too tall to paint ({} px)",
            screen.name, placed.height
        )));
    }

    let background = screen
        .style
        .background_color
        .as_deref()
        .and_then(paint_color)
        .unwrap_or(WHITE);
    let mut painter = Painter {
        tokens,
        screen: &screen.name,
        seed: chart_seed,
        out: Vec::new(),
    };

    for placement in &placed.sections {
        let section = &screen.sections[placement.index];
        if let Some(fill) = painter.fill_of(&section.style) {
            painter.out.push(PaintCmd::Rect {
                rect: placement.rect,
                fill,
            });
        }
        for (i, (c, b)) in section
            .components
            .iter()
            .zip(&placement.content.boxes)
            .enumerate()
        {
            painter.draw(c, *b, &format!("{}/{i}", placement.index));
        }
    }

    tracing::debug!(
        screen = %screen.name,
        height = placed.height,
        commands = painter.out.len(),
        "painted screen"
    );
    Ok(Page {
        screen: screen.name.clone(),
        width: viewport_width,
        height: placed.height,
        background,
        font_family: tokens.font_family.clone(),
        commands: painter.out,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
