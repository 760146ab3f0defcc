//! Repository Implementations
//!
//! Concrete implementations of the `AnimalRepository` port.

mod json;
mod mapping;
mod memory;
mod sqlite;

pub use json::JsonAnimalRepository;
pub use memory::InMemoryAnimalRepository;
pub use sqlite::SqliteAnimalRepository;
