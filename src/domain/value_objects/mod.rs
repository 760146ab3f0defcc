//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod animal_id;
mod species;

pub use animal_id::AnimalId;
pub use species::{generate_id, id_prefix_for, Species};
