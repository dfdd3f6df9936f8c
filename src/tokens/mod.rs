//! Design-token registry: built-in defaults merged with an optional design system.

pub(crate) mod color;
pub(crate) mod defaults;
pub(crate) mod design_system;
pub(crate) mod set;
