//! Wirecraft turns AI-generated wireframe JSON into checked, styled, fixed-width pages.
//!
//! The pipeline has four stages, each usable on its own:
//!
//! - Resolve design tokens from built-in defaults and an optional [`DesignSystem`]
//! - [`validate`] (and optionally [`auto_fix`]) the screen tree
//! - [`beautify`] screens into a styled tree
//! - [`render`] styled screens into [`Page`] command lists, then SVG or PNG
//!
//! [`run`] chains all of them for a loaded [`Document`].
#![forbid(unsafe_code)]

mod foundation;

pub mod layout;
pub mod render;
pub mod scene;
pub mod schema;
pub mod session;
pub mod style;
pub mod tokens;

pub use crate::foundation::core::{BezPath, Edges, Point, Rect, Rgba8};
pub use crate::foundation::error::{WirecraftError, WirecraftResult};

pub use crate::render::paint::{Page, PaintCmd, RoundedRect, Stroke, TextAnchor};
pub use crate::render::raster::{
    FrameRGBA, RasterOpts, Rasterizer, encode_png, rasterize_page, stack_pages, write_png,
};
pub use crate::render::{RenderOpts, rasterize_pages, render};
pub use crate::scene::component::{Component, ComponentKind};
pub use crate::scene::document::{Document, load_design_system};
pub use crate::scene::model::{ComponentNode, DocumentDef, Loose, Screen, Section};
pub use crate::schema::autofix::{AppliedFix, FixReport, auto_fix, validate_and_fix};
pub use crate::schema::design_system::validate_design_system;
pub use crate::schema::issue::{
    IssueCode, Severity, ValidationIssue, ValidationResult, ValidationStats,
};
pub use crate::schema::validate::validate;
pub use crate::session::pipeline::{PipelineOpts, PipelineOutput, run};
pub use crate::style::record::StyleRecord;
pub use crate::style::resolve::{Beautified, StyledComponent, StyledScreen, StyledSection, beautify};
pub use crate::tokens::design_system::DesignSystem;
pub use crate::tokens::set::{ThemeMode, TokenSet, resolve_tokens};
