//! PetFriends - pet shelter management
//!
//! Keeps track of the dogs and cats a shelter is caring for: who they are,
//! what they look like, and which details are still missing. Animals are
//! stored through a pluggable repository (JSON file, SQLite, or memory) and
//! managed from an interactive menu or one-shot subcommands.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod observability;
pub mod presentation;

// Re-exports for convenience
pub use application::{AddAnimalRequest, AddAnimalResult, AnimalService, Corrections};
pub use config::{Config, StorageBackend};
pub use domain::entities::{Animal, AnimalBuilder};
pub use domain::ports::{AnimalRepository, RepositoryError};
pub use domain::value_objects::{AnimalId, Species};
pub use domain::AnimalError;
pub use error::{PetsError, PetsResult};
