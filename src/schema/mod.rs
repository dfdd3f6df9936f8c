//! Structural validation and in-place repair of wireframe documents.

pub mod autofix;
pub mod design_system;
pub mod issue;
pub mod validate;
