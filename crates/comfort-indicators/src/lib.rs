//! Thermal comfort indicator algorithms.
//!
//! The formula modules are pure functions over optional inputs; a missing
//! input yields a missing result. [`IndicatorEngine`] applies them to a
//! [`comfort_model::NormalizedDataset`].

pub mod ddh;
pub mod discomfort;
pub mod engine;
pub mod heat_index;
pub mod overheating;
pub mod psychrometrics;

pub use discomfort::{DiscomfortLevel, discomfort_index};
pub use engine::IndicatorEngine;
pub use heat_index::{HeatIndexLevel, heat_index};
pub use overheating::{alpha, ambient_warmness_degree, indoor_overheating_degree};
