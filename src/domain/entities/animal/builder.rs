//! Animal construction
//!
//! [`build_animal`] is the single place where raw input becomes an
//! [`Animal`]. [`AnimalBuilder`] is a fluent front-end over it that starts
//! from a clean draft again after every successful build, so one builder can
//! be reused in a loop without leaking fields between animals.

use super::{Animal, DEFAULT_VALUE, UNKNOWN_AGE};
use crate::domain::value_objects::{AnimalId, Species};
use crate::domain::AnimalError;

/// Raw, unvalidated fields for a new animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    pub species: String,
    pub id: String,
    pub age: String,
    pub physical_description: String,
    pub personality_description: String,
    pub nickname: String,
}

impl Default for AnimalDraft {
    fn default() -> Self {
        Self {
            species: String::new(),
            id: String::new(),
            age: UNKNOWN_AGE.to_string(),
            physical_description: DEFAULT_VALUE.to_string(),
            personality_description: DEFAULT_VALUE.to_string(),
            nickname: DEFAULT_VALUE.to_string(),
        }
    }
}

/// Validate a draft and produce the matching dog or cat.
///
/// Checks run in a fixed order: missing species, missing id, unsupported
/// species.
pub fn build_animal(draft: AnimalDraft) -> Result<Animal, AnimalError> {
    if draft.species.trim().is_empty() {
        return Err(AnimalError::InvalidSpecies {
            species: draft.species,
        });
    }
    if draft.id.trim().is_empty() {
        return Err(AnimalError::IdRequired);
    }
    let species = Species::parse(&draft.species).ok_or_else(|| AnimalError::InvalidSpecies {
        species: draft.species.clone(),
    })?;
    let id = AnimalId::new(draft.id)?;

    Ok(Animal::new(
        species,
        id,
        draft.age,
        draft.physical_description,
        draft.personality_description,
        draft.nickname,
    ))
}

/// Fluent builder for [`Animal`].
///
/// ```
/// use petfriends::domain::entities::AnimalBuilder;
///
/// let dog = AnimalBuilder::new()
///     .with_species("Dog")
///     .with_id("d1")
///     .build()
///     .unwrap();
/// assert!(dog.is_dog());
/// assert_eq!(dog.age(), "?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimalBuilder {
    draft: AnimalDraft,
}

impl AnimalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored lower-cased.
    pub fn with_species(&mut self, species: &str) -> &mut Self {
        self.draft.species = species.to_lowercase();
        self
    }

    pub fn with_id(&mut self, id: &str) -> &mut Self {
        self.draft.id = id.to_string();
        self
    }

    pub fn with_age(&mut self, age: &str) -> &mut Self {
        self.draft.age = age.to_string();
        self
    }

    pub fn with_physical_description(&mut self, description: &str) -> &mut Self {
        self.draft.physical_description = description.to_string();
        self
    }

    pub fn with_personality_description(&mut self, description: &str) -> &mut Self {
        self.draft.personality_description = description.to_string();
        self
    }

    pub fn with_nickname(&mut self, nickname: &str) -> &mut Self {
        self.draft.nickname = nickname.to_string();
        self
    }

    /// Build the animal and reset to a fresh draft.
    ///
    /// On failure the draft is kept so the caller can fix the offending field.
    pub fn build(&mut self) -> Result<Animal, AnimalError> {
        let animal = build_animal(self.draft.clone())?;
        self.draft = AnimalDraft::default();
        Ok(animal)
    }
}
