//! Error types for seed finding.

use thiserror::Error;

/// Seed finding error type.
///
/// Both variants are raised at build time (grid construction or
/// `Seedfinder` construction) and abort the operation. The steady-state
/// pipeline never fails: every geometric or kinematic cut is a filter
/// that shrinks the candidate set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedingError {
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("invalid space point: {0}")]
    InputInvalid(String),
}

pub type Result<T> = std::result::Result<T, SeedingError>;
