//! Animal aggregate
//!
//! Dogs and cats share every field; the species tag is the only thing that
//! tells them apart, so both are represented by a single [`Animal`].

use std::fmt;

use crate::domain::value_objects::{AnimalId, Species};

mod builder;

pub use builder::{build_animal, AnimalBuilder, AnimalDraft};

/// Placeholder stored when an animal's age is unknown.
pub const UNKNOWN_AGE: &str = "?";

/// Placeholder stored for descriptive text that has not been supplied yet.
pub const DEFAULT_VALUE: &str = "tbd";

/// A dog or cat managed by the shelter.
///
/// Species and id are fixed at construction. The descriptive fields are
/// never empty: blank input falls back to [`UNKNOWN_AGE`] or [`DEFAULT_VALUE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    species: Species,
    id: AnimalId,
    age: String,
    physical_description: String,
    personality_description: String,
    nickname: String,
}

impl Animal {
    pub fn new(
        species: Species,
        id: AnimalId,
        age: impl Into<String>,
        physical_description: impl Into<String>,
        personality_description: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            species,
            id,
            age: or_sentinel(age.into(), UNKNOWN_AGE),
            physical_description: or_sentinel(physical_description.into(), DEFAULT_VALUE),
            personality_description: or_sentinel(personality_description.into(), DEFAULT_VALUE),
            nickname: or_sentinel(nickname.into(), DEFAULT_VALUE),
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn id(&self) -> &AnimalId {
        &self.id
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn physical_description(&self) -> &str {
        &self.physical_description
    }

    pub fn personality_description(&self) -> &str {
        &self.personality_description
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn is_dog(&self) -> bool {
        self.species == Species::Dog
    }

    pub fn is_cat(&self) -> bool {
        self.species == Species::Cat
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = or_sentinel(value.into(), UNKNOWN_AGE);
    }

    pub fn set_physical_description(&mut self, value: impl Into<String>) {
        self.physical_description = or_sentinel(value.into(), DEFAULT_VALUE);
    }

    pub fn set_personality_description(&mut self, value: impl Into<String>) {
        self.personality_description = or_sentinel(value.into(), DEFAULT_VALUE);
    }

    pub fn set_nickname(&mut self, value: impl Into<String>) {
        self.nickname = or_sentinel(value.into(), DEFAULT_VALUE);
    }

    /// Age unknown or physical description still a placeholder.
    pub fn has_incomplete_age_or_description(&self) -> bool {
        is_unset(&self.age, UNKNOWN_AGE) || is_unset(&self.physical_description, DEFAULT_VALUE)
    }

    /// Nickname or personality description still a placeholder.
    pub fn has_incomplete_nickname_or_personality(&self) -> bool {
        is_unset(&self.nickname, DEFAULT_VALUE)
            || is_unset(&self.personality_description, DEFAULT_VALUE)
    }

    /// Case-insensitive species match plus a case-insensitive substring
    /// search of `characteristic` in either description.
    pub fn matches_characteristic(&self, species: &str, characteristic: &str) -> bool {
        if !self.species.as_str().eq_ignore_ascii_case(species.trim()) {
            return false;
        }
        let needle = characteristic.to_lowercase();
        self.physical_description.to_lowercase().contains(&needle)
            || self.personality_description.to_lowercase().contains(&needle)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Species: {}", self.species)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Physical Description: {}", self.physical_description)?;
        writeln!(f, "Personality Description: {}", self.personality_description)?;
        write!(f, "Nickname: {}", self.nickname)
    }
}

/// True when a value is blank or exactly `sentinel`.
pub(crate) fn is_unset(value: &str, sentinel: &str) -> bool {
    value.trim().is_empty() || value == sentinel
}

fn or_sentinel(value: String, sentinel: &str) -> String {
    if value.trim().is_empty() {
        sentinel.to_string()
    } else {
        value
    }
}
