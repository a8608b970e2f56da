//! CLI library components for the schools directory toolkit.

pub mod data;
pub mod logging;
