//! CLI library components for the comfort indicator tool.

pub mod logging;
pub mod simulation;
