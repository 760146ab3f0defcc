//! AnimalRepository port
//!
//! The only way the rest of the application reads or writes animals.
//! Implementations decide where the collection lives (JSON file, SQLite,
//! memory); callers only see domain `Animal`s.

use std::error::Error as StdError;

use crate::domain::entities::Animal;
use crate::domain::value_objects::AnimalId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("an animal with id '{id}' already exists")]
    DuplicateId { id: AnimalId },

    #[error("no animal with id '{id}' is stored")]
    NotFound { id: AnimalId },

    #[error("stored animal has unknown species '{species}'")]
    UnknownSpecies { species: String },

    #[error("failed to persist animals: {source}")]
    Persistence {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl RepositoryError {
    /// Wrap a storage failure, keeping it as the error's `source()`.
    pub fn persistence(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        RepositoryError::Persistence { source: err.into() }
    }
}

// Persistence causes compare by message; the boxed error has no `PartialEq`.
impl PartialEq for RepositoryError {
    fn eq(&self, other: &Self) -> bool {
        use RepositoryError::*;
        match (self, other) {
            (DuplicateId { id: a }, DuplicateId { id: b }) => a == b,
            (NotFound { id: a }, NotFound { id: b }) => a == b,
            (UnknownSpecies { species: a }, UnknownSpecies { species: b }) => a == b,
            (Persistence { source: a }, Persistence { source: b }) => {
                a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}

impl Eq for RepositoryError {}

/// Persistence boundary for the animal collection.
///
/// Reads take `&self`; anything that changes the collection takes
/// `&mut self`. Mutations may stay pending until [`save_changes`] is called,
/// so callers always finish a use case with it.
///
/// The three query methods have default implementations that filter
/// [`get_all_animals`]; stores with a query language override them.
///
/// [`save_changes`]: AnimalRepository::save_changes
/// [`get_all_animals`]: AnimalRepository::get_all_animals
pub trait AnimalRepository {
    /// Every stored animal, in storage order.
    fn get_all_animals(&self) -> RepositoryResult<Vec<Animal>>;

    /// Number of stored animals with a non-empty id.
    fn get_animal_count(&self) -> RepositoryResult<usize> {
        Ok(self.get_all_animals()?.len())
    }

    /// Append a new animal. Fails with `DuplicateId` if the id is taken.
    fn add_animal(&mut self, animal: Animal) -> RepositoryResult<()>;

    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Animal>>;

    /// Replace the stored animal with the same id. Fails with `NotFound`.
    fn update_animal(&mut self, animal: &Animal) -> RepositoryResult<()>;

    /// Remove the animal with the same id; a missing id is not an error.
    fn delete_animal(&mut self, animal: &Animal) -> RepositoryResult<()>;

    fn get_animals_with_incomplete_age_or_description(&self) -> RepositoryResult<Vec<Animal>> {
        Ok(self
            .get_all_animals()?
            .into_iter()
            .filter(Animal::has_incomplete_age_or_description)
            .collect())
    }

    fn get_animals_with_incomplete_nickname_or_personality(
        &self,
    ) -> RepositoryResult<Vec<Animal>> {
        Ok(self
            .get_all_animals()?
            .into_iter()
            .filter(Animal::has_incomplete_nickname_or_personality)
            .collect())
    }

    fn get_animals_with_characteristic(
        &self,
        species: &str,
        characteristic: &str,
    ) -> RepositoryResult<Vec<Animal>> {
        Ok(self
            .get_all_animals()?
            .into_iter()
            .filter(|a| a.matches_characteristic(species, characteristic))
            .collect())
    }

    /// Commit pending mutations to the backing store.
    fn save_changes(&mut self) -> RepositoryResult<()>;
}

impl<R: AnimalRepository + ?Sized> AnimalRepository for Box<R> {
    fn get_all_animals(&self) -> RepositoryResult<Vec<Animal>> {
        (**self).get_all_animals()
    }

    fn get_animal_count(&self) -> RepositoryResult<usize> {
        (**self).get_animal_count()
    }

    fn add_animal(&mut self, animal: Animal) -> RepositoryResult<()> {
        (**self).add_animal(animal)
    }

    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Animal>> {
        (**self).get_by_id(id)
    }

    fn update_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        (**self).update_animal(animal)
    }

    fn delete_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        (**self).delete_animal(animal)
    }

    fn get_animals_with_incomplete_age_or_description(&self) -> RepositoryResult<Vec<Animal>> {
        (**self).get_animals_with_incomplete_age_or_description()
    }

    fn get_animals_with_incomplete_nickname_or_personality(
        &self,
    ) -> RepositoryResult<Vec<Animal>> {
        (**self).get_animals_with_incomplete_nickname_or_personality()
    }

    fn get_animals_with_characteristic(
        &self,
        species: &str,
        characteristic: &str,
    ) -> RepositoryResult<Vec<Animal>> {
        (**self).get_animals_with_characteristic(species, characteristic)
    }

    fn save_changes(&mut self) -> RepositoryResult<()> {
        (**self).save_changes()
    }
}
