//! Animal Use Case
//!
//! Coordinates the domain service and the repository for every menu action.

use crate::application::errors::{ApplicationError, ApplicationResult};
use crate::domain::entities::Animal;
use crate::domain::ports::AnimalRepository;
use crate::domain::services::AnimalDomainService;

use super::corrections::{
    apply_age_and_description, apply_nickname_and_personality, plan_corrections, Corrections,
};
use super::request::AddAnimalRequest;
use super::result::AddAnimalResult;

/// Animal use cases over a repository
pub struct AnimalService<R>
where
    R: AnimalRepository,
{
    repository: R,
    domain: AnimalDomainService,
}

impl<R> AnimalService<R>
where
    R: AnimalRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            domain: AnimalDomainService::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Every stored animal in storage order.
    pub fn list_all(&self) -> ApplicationResult<Vec<Animal>> {
        let animals = self.repository.get_all_animals()?;
        tracing::debug!(operation = "list_all", count = animals.len(), "listed animals");
        Ok(animals)
    }

    pub fn get_animal_by_id(&self, id: &str) -> ApplicationResult<Option<Animal>> {
        let animal = self.repository.get_by_id(id.trim())?;
        if animal.is_none() {
            tracing::debug!(animal_id = %id, "animal not found");
        }
        Ok(animal)
    }

    pub fn animal_count(&self) -> ApplicationResult<usize> {
        Ok(self.repository.get_animal_count()?)
    }

    /// Validate, identify, build and store a new animal.
    ///
    /// Unsupported species and a full shelter come back as a rejected
    /// [`AddAnimalResult`]; storage failures are `Err`.
    pub fn add_new_animal(
        &mut self,
        request: &AddAnimalRequest,
    ) -> ApplicationResult<AddAnimalResult> {
        let species = request.species.trim();
        tracing::debug!(operation = "add_new_animal", species, "creating new animal");

        let count = self.repository.get_animal_count()?;
        tracing::debug!(pet_count = count, "current pet count");

        if let Err(error) = self.domain.validate_new_animal(species, count) {
            tracing::info!(%error, "animal validation failed");
            return Ok(AddAnimalResult::rejected(error));
        }

        let id = self.next_free_id(species, count + 1)?;
        let animal = self.domain.build_animal(
            species,
            &id,
            &request.age,
            &request.physical_description,
            &request.personality_description,
            &request.nickname,
        )?;

        self.repository.add_animal(animal.clone())?;
        self.repository.save_changes()?;

        tracing::info!(animal_id = %animal.id(), species = %animal.species(), "created animal");
        Ok(AddAnimalResult::accepted(animal))
    }

    /// Id the next animal of `species` will receive.
    pub fn next_id(&self, species: &str) -> ApplicationResult<String> {
        let count = self.repository.get_animal_count()?;
        self.next_free_id(species.trim(), count + 1)
    }

    /// `{prefix}{index}`, moving past ids left behind by earlier removals.
    fn next_free_id(&self, species: &str, mut index: usize) -> ApplicationResult<String> {
        loop {
            let id = self.domain.generate_id(species, index);
            if self.repository.get_by_id(&id)?.is_none() {
                return Ok(id);
            }
            index += 1;
        }
    }

    /// Set the age of `id`. `false` when no such animal exists.
    pub fn update_animal_age(&mut self, id: &str, age: &str) -> ApplicationResult<bool> {
        self.update_one(id, "update_age", |animal| animal.set_age(age))
    }

    /// Set the personality description of `id`. `false` when no such animal exists.
    pub fn update_animal_personality(
        &mut self,
        id: &str,
        personality: &str,
    ) -> ApplicationResult<bool> {
        self.update_one(id, "update_personality", |animal| {
            animal.set_personality_description(personality)
        })
    }

    fn update_one<F>(&mut self, id: &str, operation: &str, change: F) -> ApplicationResult<bool>
    where
        F: FnOnce(&mut Animal),
    {
        let Some(mut animal) = self.get_animal_by_id(id)? else {
            return Ok(false);
        };
        change(&mut animal);
        self.repository.update_animal(&animal)?;
        self.repository.save_changes()?;
        tracing::info!(operation, animal_id = %animal.id(), "updated animal");
        Ok(true)
    }

    /// Delete `id`. `false` when no such animal exists.
    pub fn remove_animal(&mut self, id: &str) -> ApplicationResult<bool> {
        let Some(animal) = self.get_animal_by_id(id)? else {
            return Ok(false);
        };
        self.repository.delete_animal(&animal)?;
        self.repository.save_changes()?;
        tracing::info!(animal_id = %animal.id(), "removed animal");
        Ok(true)
    }

    pub fn get_animals_with_incomplete_age_or_description(
        &self,
    ) -> ApplicationResult<Vec<Animal>> {
        let animals = self
            .repository
            .get_animals_with_incomplete_age_or_description()?;
        tracing::debug!(
            data = "age or description",
            count = animals.len(),
            "filtered incomplete animals"
        );
        Ok(animals)
    }

    pub fn get_animals_with_incomplete_nickname_or_personality(
        &self,
    ) -> ApplicationResult<Vec<Animal>> {
        let animals = self
            .repository
            .get_animals_with_incomplete_nickname_or_personality()?;
        tracing::debug!(
            data = "nickname or personality",
            count = animals.len(),
            "filtered incomplete animals"
        );
        Ok(animals)
    }

    /// Animals of `species` whose descriptions mention `characteristic`.
    ///
    /// A blank species or characteristic matches nothing.
    pub fn get_animals_with_characteristic(
        &self,
        species: &str,
        characteristic: &str,
    ) -> ApplicationResult<Vec<Animal>> {
        let (species, characteristic) = (species.trim(), characteristic.trim());
        if species.is_empty() || characteristic.is_empty() {
            tracing::debug!(species, characteristic, "search called with empty parameters");
            return Ok(Vec::new());
        }

        let animals = self
            .repository
            .get_animals_with_characteristic(species, characteristic)?;
        tracing::debug!(species, characteristic, count = animals.len(), "search completed");
        Ok(animals)
    }

    /// Apply a batch of corrections and save once.
    ///
    /// Every entry is checked before anything is written; see
    /// [`ApplicationError`] for the ways a batch is rejected. Returns the
    /// number of animals updated.
    pub fn complete_fields_from_corrections<A>(
        &mut self,
        corrections: &Corrections,
        apply: A,
    ) -> ApplicationResult<usize>
    where
        A: Fn(&mut Animal, &str, &str) -> bool,
    {
        let repository = &self.repository;
        let updated = plan_corrections(
            corrections,
            |id| repository.get_by_id(id).map_err(ApplicationError::from),
            apply,
        )?;

        tracing::debug!(count = updated.len(), "updating animals with corrections");
        for animal in &updated {
            self.repository.update_animal(animal)?;
        }
        self.repository.save_changes()?;
        Ok(updated.len())
    }

    /// Fill in ages and physical descriptions; `(age, physical_description)` per id.
    pub fn complete_ages_and_descriptions(
        &mut self,
        corrections: &Corrections,
    ) -> ApplicationResult<usize> {
        tracing::debug!(update = "ages and descriptions", "starting batch update");
        let count = self.complete_fields_from_corrections(corrections, apply_age_and_description)?;
        tracing::info!(update = "ages and descriptions", count, "completed batch update");
        Ok(count)
    }

    /// Fill in nicknames and personalities; `(nickname, personality)` per id.
    pub fn complete_nicknames_and_personality(
        &mut self,
        corrections: &Corrections,
    ) -> ApplicationResult<usize> {
        tracing::debug!(update = "nicknames and personality", "starting batch update");
        let count =
            self.complete_fields_from_corrections(corrections, apply_nickname_and_personality)?;
        tracing::info!(update = "nicknames and personality", count, "completed batch update");
        Ok(count)
    }
}
