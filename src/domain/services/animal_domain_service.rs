//! Admission rules for new animals.

use crate::domain::entities::{build_animal, Animal, AnimalDraft};
use crate::domain::value_objects::{generate_id, Species};
use crate::domain::AnimalError;

/// The shelter never manages more animals than this.
pub const MAX_PETS: usize = 8;

/// Validates, identifies and builds new animals.
///
/// Stateless; every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalDomainService;

impl AnimalDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether an animal of `species` may join `current_count` others.
    ///
    /// Species is checked before capacity: an unsupported species is
    /// rejected even when the shelter is full.
    pub fn validate_new_animal(
        &self,
        species: &str,
        current_count: usize,
    ) -> Result<(), AnimalError> {
        if !self.is_supported_species(species) {
            return Err(AnimalError::InvalidSpecies {
                species: species.to_string(),
            });
        }
        if current_count >= MAX_PETS {
            return Err(AnimalError::PetLimitReached { max: MAX_PETS });
        }
        Ok(())
    }

    pub fn generate_id(&self, species: &str, index: usize) -> String {
        generate_id(species, index)
    }

    pub fn build_animal(
        &self,
        species: &str,
        id: &str,
        age: &str,
        physical_description: &str,
        personality_description: &str,
        nickname: &str,
    ) -> Result<Animal, AnimalError> {
        build_animal(AnimalDraft {
            species: species.to_lowercase(),
            id: id.to_string(),
            age: age.to_string(),
            physical_description: physical_description.to_string(),
            personality_description: personality_description.to_string(),
            nickname: nickname.to_string(),
        })
    }

    pub fn is_supported_species(&self, species: &str) -> bool {
        Species::parse(species).is_some()
    }
}
