use thiserror::Error;

use comfort_map::ResolveError;
use comfort_transform::RangeError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("invalid date range: {0}")]
    Range(#[from] RangeError),

    #[error("no indicators requested")]
    NoIndicators,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
