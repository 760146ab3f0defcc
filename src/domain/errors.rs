//! Domain errors
//!
//! Raised while constructing or validating an animal.

/// Why an animal could not be identified, built, or admitted.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AnimalError {
    #[error("animal id cannot be empty")]
    EmptyId,

    #[error("an animal id must be specified")]
    IdRequired,

    #[error("unsupported species '{species}', expected 'dog' or 'cat'")]
    InvalidSpecies { species: String },

    #[error("pet limit reached: at most {max} animals can be managed")]
    PetLimitReached { max: usize },
}

impl AnimalError {
    /// True for rejections caused by user input rather than misuse of the API.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnimalError::InvalidSpecies { .. } | AnimalError::PetLimitReached { .. }
        )
    }
}
