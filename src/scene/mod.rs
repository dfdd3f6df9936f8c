pub mod component;
pub mod document;
pub mod model;
