//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod animal_repository;

pub use animal_repository::{AnimalRepository, RepositoryError, RepositoryResult};
