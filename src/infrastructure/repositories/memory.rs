//! In-memory Animal Repository
//!
//! Vector-backed store for tests and the `memory` backend. Nothing survives
//! the process; `save_changes` only counts how often it was called.

use crate::domain::entities::Animal;
use crate::domain::ports::{AnimalRepository, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAnimalRepository {
    animals: Vec<Animal>,
    save_count: usize,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `animals` already stored, in order.
    pub fn with_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        Self {
            animals: animals.into_iter().collect(),
            save_count: 0,
        }
    }

    /// How many times `save_changes` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl AnimalRepository for InMemoryAnimalRepository {
    fn get_all_animals(&self) -> RepositoryResult<Vec<Animal>> {
        Ok(self.animals.clone())
    }

    fn get_animal_count(&self) -> RepositoryResult<usize> {
        Ok(self.animals.len())
    }

    fn add_animal(&mut self, animal: Animal) -> RepositoryResult<()> {
        if self.animals.iter().any(|a| a.id() == animal.id()) {
            return Err(RepositoryError::DuplicateId {
                id: animal.id().clone(),
            });
        }
        self.animals.push(animal);
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Animal>> {
        Ok(self.animals.iter().find(|a| a.id() == id).cloned())
    }

    fn update_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        let stored = self
            .animals
            .iter_mut()
            .find(|a| a.id() == animal.id())
            .ok_or_else(|| RepositoryError::NotFound {
                id: animal.id().clone(),
            })?;
        *stored = animal.clone();
        Ok(())
    }

    fn delete_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        self.animals.retain(|a| a.id() != animal.id());
        Ok(())
    }

    fn save_changes(&mut self) -> RepositoryResult<()> {
        self.save_count += 1;
        Ok(())
    }
}
