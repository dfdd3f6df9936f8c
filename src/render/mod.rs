//! Geometry and paint: styled screens become page-sized command lists, then SVG or pixels.

pub mod paint;
pub mod painter;
pub mod raster;
pub mod svg;

use rayon::prelude::*;

use crate::foundation::error::{WirecraftError, WirecraftResult};
use crate::render::paint::Page;
use crate::render::raster::{FrameRGBA, Rasterizer};
use crate::style::resolve::{Beautified, StyledScreen};

/// Knobs for painting a styled document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    /// Base seed for placeholder chart data.
    pub chart_seed: u64,
    /// Paint screens on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Pool size when `parallel` is set; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl RenderOpts {
    pub fn with_chart_seed(mut self, seed: u64) -> Self {
        self.chart_seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

/// Paint every screen of `styled` at `viewport_width`, one page per screen in input order.
#[tracing::instrument(skip(styled, opts), fields(screens = styled.screens.len()))]
pub fn render(
    styled: &Beautified,
    viewport_width: f64,
    opts: &RenderOpts,
) -> WirecraftResult<Vec<Page>> {
    let paint = |screen: &StyledScreen| {
        painter::paint_screen(screen, &styled.tokens, viewport_width, opts.chart_seed)
    };
    if !opts.parallel {
        return styled.screens.iter().map(paint).collect();
    }
    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| styled.screens.par_iter().map(paint).collect())
}

/// Rasterize pages, preserving order.
pub fn rasterize_pages(
    pages: &[Page],
    rasterizer: &Rasterizer,
    opts: &RenderOpts,
) -> WirecraftResult<Vec<FrameRGBA>> {
    if !opts.parallel {
        return pages.iter().map(|p| rasterizer.rasterize(p)).collect();
    }
    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| pages.par_iter().map(|p| rasterizer.rasterize(p)).collect())
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> WirecraftResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(WirecraftError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| WirecraftError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
