use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use image::ImageEncoder;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{WirecraftError, WirecraftResult};
use crate::render::paint::Page;

/// Largest raster edge accepted, in device pixels.
pub const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Options controlling rasterization.
#[derive(Clone, Debug)]
pub struct RasterOpts {
    /// Device pixels per layout unit.
    pub scale: f64,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` files.
    pub fonts_dir: Option<PathBuf>,
    /// Load the host's installed fonts.
    pub system_fonts: bool,
    pub max_dim: u32,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            scale: 1.0,
            fonts_dir: None,
            system_fonts: true,
            max_dim: MAX_DIM,
        }
    }
}

impl RasterOpts {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    pub fn with_system_fonts(mut self, on: bool) -> Self {
        self.system_fonts = on;
        self
    }

    pub fn with_max_dim(mut self, max_dim: u32) -> Self {
        self.max_dim = max_dim;
        self
    }
}

/// Turns painted pages into pixels through `usvg`/`resvg`.
///
/// The font database is built once and shared by every page.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    scale: f64,
    max_dim: u32,
}

impl Rasterizer {
    pub fn new(opts: &RasterOpts) -> WirecraftResult<Self> {
        if !opts.scale.is_finite() || opts.scale <= 0.0 {
            return Err(WirecraftError::render(format!(
                "raster scale must be positive and finite, got {}",
                opts.scale
            )));
        }
        Ok(Self {
            fontdb: build_fontdb(opts.system_fonts, opts.fonts_dir.as_deref()),
            scale: opts.scale,
            max_dim: opts.max_dim.min(MAX_DIM),
        })
    }

    /// Number of font faces available to text.
    pub fn font_faces(&self) -> usize {
        self.fontdb.faces().count()
    }

    /// Target size of `page` in device pixels.
    pub fn raster_size(&self, page: &Page) -> WirecraftResult<(u32, u32)> {
        let w = (page.width * self.scale).ceil();
        let h = (page.height * self.scale).ceil();
        let limit = f64::from(self.max_dim);
        if !w.is_finite() || !h.is_finite() || w < 1.0 || h < 1.0 || w > limit || h > limit {
            return Err(WirecraftError::render(format!(
                "page '{}' raster size {w}x{h} is outside 1..={}",
                page.screen, self.max_dim
            )));
        }
        Ok((w as u32, h as u32))
    }

    #[tracing::instrument(skip(self, page), fields(screen = %page.screen))]
    pub fn rasterize(&self, page: &Page) -> WirecraftResult<FrameRGBA> {
        let (width, height) = self.raster_size(page)?;
        let svg = page.to_svg();
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .with_context(|| format!("parse page svg for '{}'", page.screen))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| WirecraftError::render("failed to allocate raster target"))?;
        let s = self.scale as f32;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(s, s),
            &mut pixmap.as_mut(),
        );

        let data = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        tracing::debug!(width, height, "rasterized page");
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: false,
        })
    }
}

fn build_fontdb(system_fonts: bool, fonts_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if system_fonts {
        db.load_system_fonts();
    }
    if let Some(dir) = fonts_dir {
        load_fonts_from_dir(&mut db, dir);
    }
    tracing::debug!(faces = db.faces().count(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "fonts directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

/// Requested families first, then generic sans-serif, then any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

/// Rasterize a single page with a one-off [`Rasterizer`].
pub fn rasterize_page(page: &Page, opts: &RasterOpts) -> WirecraftResult<FrameRGBA> {
    Rasterizer::new(opts)?.rasterize(page)
}

/// Encode a straight-alpha frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> WirecraftResult<Vec<u8>> {
    if frame.premultiplied {
        return Err(WirecraftError::render("png output expects straight alpha"));
    }
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(buf)
}

/// Write `frame` as a PNG file.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> WirecraftResult<()> {
    let bytes = encode_png(frame)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Stack frames vertically, `gap` rows apart, on a `background` canvas as wide as the widest.
pub fn stack_pages(frames: &[FrameRGBA], gap: u32, background: Rgba8) -> WirecraftResult<FrameRGBA> {
    if frames.is_empty() {
        return Err(WirecraftError::render("nothing to stack"));
    }
    for (i, f) in frames.iter().enumerate() {
        if f.width == 0 || f.height == 0 {
            return Err(WirecraftError::render(format!(
                "frame {i} is empty ({}x{})",
                f.width, f.height
            )));
        }
        let expected = f.width as usize * f.height as usize * 4;
        if f.data.len() != expected {
            return Err(WirecraftError::render(format!(
                "frame {i} holds {} bytes, expected {expected} for {}x{}",
                f.data.len(),
                f.width,
                f.height
            )));
        }
    }
    let width = frames.iter().map(|f| f.width).max().unwrap_or(0);
    let gaps = gap as u64 * (frames.len() as u64 - 1);
    let height = frames.iter().map(|f| u64::from(f.height)).sum::<u64>() + gaps;
    if u64::from(width) > u64::from(MAX_DIM) || height > u64::from(MAX_DIM) {
        return Err(WirecraftError::render(format!(
            "stacked image {width}x{height} exceeds {MAX_DIM}"
        )));
    }
    let height = height as u32;

    let px = [background.r, background.g, background.b, background.a];
    let mut data = px.repeat(width as usize * height as usize);
    let stride = width as usize * 4;
    let mut y0 = 0usize;
    for f in frames {
        let row = f.width as usize * 4;
        for (y, src) in f.data.chunks_exact(row).enumerate() {
            let start = (y0 + y) * stride;
            data[start..start + row].copy_from_slice(src);
        }
        y0 += f.height as usize + gap as usize;
    }
    Ok(FrameRGBA {
        width,
        height,
        data,
        premultiplied: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
