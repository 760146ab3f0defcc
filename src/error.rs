//! Crate-level error type
//!
//! Wraps the layered errors so bootstrap code (config, storage setup) can
//! use a single `?` chain.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ports::RepositoryError;

/// Result type alias for petfriends operations
pub type PetsResult<T> = Result<T, PetsError>;

#[derive(Error, Debug)]
pub enum PetsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but cannot be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Unrecognised value in an environment override
    #[error("invalid value '{value}' for {variable}")]
    InvalidEnv { variable: String, value: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}
