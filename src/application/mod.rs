//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AnimalService` - Every animal operation offered by the menu

pub mod animals;
mod errors;

pub use animals::{AddAnimalRequest, AddAnimalResult, AnimalService, Corrections};
pub use errors::{ApplicationError, ApplicationResult};
