use crate::foundation::error::{WirecraftError, WirecraftResult};
use crate::scene::model::{DocumentDef, Screen};
use crate::tokens::design_system::DesignSystem;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Wireframe document boundary object.
///
/// Wraps the JSON-facing [`DocumentDef`]. Parsing only fails on malformed JSON; structurally
/// incomplete documents load and are reported by [`crate::validate`].
#[derive(Debug, Clone, Default)]
pub struct Document {
    def: DocumentDef,
}

impl Document {
    /// Parse a document from a JSON reader.
    ///
    /// Accepts either `{ "screens": [...] }` or a bare array of screens.
    pub fn from_reader<R: std::io::Read>(r: R) -> WirecraftResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| WirecraftError::validation(format!("parse wireframe JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WirecraftResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WirecraftError::validation(format!("open wireframe JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> WirecraftResult<Self> {
        let def = match value {
            serde_json::Value::Array(_) => DocumentDef {
                screens: serde_json::from_value(value)
                    .map_err(|e| WirecraftError::validation(format!("parse screens: {e}")))?,
                design_system: None,
            },
            other => serde_json::from_value(other)
                .map_err(|e| WirecraftError::validation(format!("parse wireframe document: {e}")))?,
        };
        Ok(Self { def })
    }

    pub fn from_def(def: DocumentDef) -> Self {
        Self { def }
    }

    /// Replace the embedded design system.
    pub fn with_design_system(mut self, ds: Option<DesignSystem>) -> Self {
        self.def.design_system = ds;
        self
    }

    pub fn screens(&self) -> &[Screen] {
        &self.def.screens
    }

    pub fn screens_mut(&mut self) -> &mut Vec<Screen> {
        &mut self.def.screens
    }

    pub fn design_system(&self) -> Option<&DesignSystem> {
        self.def.design_system.as_ref()
    }

    pub fn def(&self) -> &DocumentDef {
        &self.def
    }

    pub fn into_def(self) -> DocumentDef {
        self.def
    }
}

/// Load a standalone design-system JSON file.
pub fn load_design_system(path: impl AsRef<Path>) -> WirecraftResult<DesignSystem> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        WirecraftError::validation(format!("open design system JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| WirecraftError::validation(format!("parse design system JSON: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
