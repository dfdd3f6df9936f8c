//! Token-driven styling of validated screens.

pub mod record;
pub mod resolve;
pub mod tables;
