use serde::Serialize;

use crate::foundation::error::{WirecraftError, WirecraftResult};
use crate::render::paint::Page;
use crate::render::{RenderOpts, render};
use crate::scene::document::Document;
use crate::schema::autofix::{FixReport, auto_fix};
use crate::schema::issue::ValidationResult;
use crate::schema::validate::validate;
use crate::style::resolve::{Beautified, beautify};
use crate::tokens::set::ThemeMode;

pub const ENV_VIEWPORT_WIDTH: &str = "WIRECRAFT_VIEWPORT_WIDTH";
pub const ENV_CHART_SEED: &str = "WIRECRAFT_CHART_SEED";

/// Options for one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOpts {
    /// Page width in layout units.
    pub viewport_width: f64,
    pub theme: ThemeMode,
    /// Repair common defects before validating.
    pub auto_fix: bool,
    pub parallel: bool,
    pub threads: Option<usize>,
    pub chart_seed: u64,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            viewport_width: 1440.0,
            theme: ThemeMode::Light,
            auto_fix: true,
            parallel: false,
            threads: None,
            chart_seed: 0,
        }
    }
}

impl PipelineOpts {
    /// Defaults with `WIRECRAFT_VIEWPORT_WIDTH` / `WIRECRAFT_CHART_SEED` applied.
    pub fn from_env() -> WirecraftResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by the `WIRECRAFT_*` variable names.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> WirecraftResult<Self> {
        if let Some(raw) = lookup(ENV_VIEWPORT_WIDTH) {
            let width = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or_else(|| {
                    WirecraftError::validation(format!(
                        "{ENV_VIEWPORT_WIDTH} must be a positive number, got '{raw}'"
                    ))
                })?;
            self.viewport_width = width;
        }
        if let Some(raw) = lookup(ENV_CHART_SEED) {
            self.chart_seed = raw.trim().parse::<u64>().map_err(|e| {
                WirecraftError::validation(format!("{ENV_CHART_SEED} '{raw}': {e}"))
            })?;
        }
        Ok(self)
    }

    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_auto_fix(mut self, on: bool) -> Self {
        self.auto_fix = on;
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

    pub fn with_chart_seed(mut self, seed: u64) -> Self {
        self.chart_seed = seed;
        self
    }

    pub fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            chart_seed: self.chart_seed,
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    pub fixes: FixReport,
    pub validation: ValidationResult,
    pub styled: Beautified,
    pub pages: Vec<Page>,
}

/// Fix, validate, style and paint `document`.
///
/// Validation findings never stop the run; the styled tree and pages are produced for
/// whatever the document contains. Only host-level failures return `Err`.
#[tracing::instrument(skip_all, fields(screens = document.screens().len(), viewport = opts.viewport_width))]
pub fn run(document: Document, opts: &PipelineOpts) -> WirecraftResult<PipelineOutput> {
    let mut def = document.into_def();

    let fixes = if opts.auto_fix {
        auto_fix(&mut def.screens)
    } else {
        FixReport::default()
    };
    let validation = validate(&def.screens, def.design_system.as_ref());
    if !validation.valid {
        tracing::warn!(
            errors = validation.stats.errors,
            warnings = validation.stats.warnings,
            "document has validation errors"
        );
    }

    let styled = beautify(&def.screens, def.design_system.as_ref(), opts.theme);
    let pages = render(&styled, opts.viewport_width, &opts.render_opts())?;
    tracing::debug!(fixes = fixes.len(), pages = pages.len(), "pipeline finished");

    Ok(PipelineOutput {
        fixes,
        validation,
        styled,
        pages,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/pipeline.rs"]
mod tests;
