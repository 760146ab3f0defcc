//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - `AnimalRepository` implementations (JSON file, SQLite, in-memory)
//! - `seed` - Starter animals inserted into an empty store

pub mod repositories;
pub mod seed;

pub use repositories::{InMemoryAnimalRepository, JsonAnimalRepository, SqliteAnimalRepository};
pub use seed::{seed_if_empty, starter_animals};
