//! Service Factory
//!
//! Wires the configured storage backend into an [`AnimalService`].
//! This is the dependency injection point for the application.

use crate::application::AnimalService;
use crate::config::{Config, StorageBackend, StorageConfig};
use crate::domain::ports::AnimalRepository;
use crate::error::PetsResult;
use crate::infrastructure::{
    seed_if_empty, InMemoryAnimalRepository, JsonAnimalRepository, SqliteAnimalRepository,
};

/// The service as the binary uses it, over whichever backend was configured
pub type ConcreteAnimalService = AnimalService<Box<dyn AnimalRepository>>;

/// Open the repository named by `storage`.
pub fn open_repository(storage: &StorageConfig) -> PetsResult<Box<dyn AnimalRepository>> {
    let repository: Box<dyn AnimalRepository> = match storage.backend {
        StorageBackend::Json => Box::new(JsonAnimalRepository::open(storage.resolved_path())?),
        StorageBackend::Sqlite => {
            Box::new(SqliteAnimalRepository::open(&storage.resolved_path())?)
        }
        StorageBackend::Memory => Box::new(InMemoryAnimalRepository::new()),
    };
    tracing::debug!(backend = %storage.backend, "opened animal repository");
    Ok(repository)
}

/// Create the animal service with all dependencies wired up
///
/// An empty store receives the starter animals unless
/// `storage.seed_on_empty` is off.
pub fn create_animal_service(config: &Config) -> PetsResult<ConcreteAnimalService> {
    let mut repository = open_repository(&config.storage)?;
    if config.storage.seed_on_empty {
        seed_if_empty(&mut repository)?;
    }
    Ok(AnimalService::new(repository))
}
