//! Bottom-up height estimation and the column math it shares with the painter.

pub mod estimate;
pub mod flow;
