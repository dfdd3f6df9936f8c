//! End-to-end runs over a loaded document.

pub mod pipeline;
