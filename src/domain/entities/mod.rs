//! Domain Entities
//!
//! - `Animal` - A dog or cat in the shelter's care
//! - `AnimalBuilder` / `AnimalDraft` - Validated construction of animals

mod animal;

pub use animal::{build_animal, Animal, AnimalBuilder, AnimalDraft, DEFAULT_VALUE, UNKNOWN_AGE};
