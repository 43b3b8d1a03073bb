//! Error types for column resolution.

use thiserror::Error;

use comfort_model::VariableRole;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A required outdoor variable has no matching column.
    #[error("required environmental variable '{role}' not found; tried: {}", .tried.join(", "))]
    MissingEnvironmental {
        role: VariableRole,
        tried: Vec<String>,
    },

    /// None of the requested zones matched any column.
    #[error("no valid zones found in simulation output; requested zones: [{}]", .zones.join(", "))]
    NoZonesResolved { zones: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
