//! Animal Id Value Object
//!
//! The unique key of an animal for its whole lifecycle.

use std::fmt;

use crate::domain::AnimalError;

/// A validated, non-blank animal identifier such as `d1` or `c4`.
///
/// Equality, hashing and ordering all follow the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(String);

impl AnimalId {
    /// Create an id, rejecting empty or whitespace-only values.
    pub fn new(value: impl Into<String>) -> Result<Self, AnimalError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AnimalError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AnimalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AnimalId {
    type Error = AnimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for AnimalId {
    type Error = AnimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnimalId> for String {
    fn from(id: AnimalId) -> Self {
        id.0
    }
}

impl PartialEq<str> for AnimalId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AnimalId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
