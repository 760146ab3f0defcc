//! Application errors
//!
//! Failures of a use case as a whole. Domain and repository errors pass
//! through unchanged so callers can still match on them.

use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::domain::AnimalError;

/// Result type for application use cases
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("no corrections were provided")]
    NoCorrectionsProvided,

    #[error("none of the corrected ids belong to a stored animal")]
    NoAnimalsFound,

    #[error("no valid modifications provided for animal '{id}'")]
    NoValidModifications { id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] AnimalError),
}
