//! Animal Use Cases
//!
//! Orchestrates everything the menu can do with animals.
//!
//! This module handles:
//! - Admitting new animals (validation, id assignment, persistence)
//! - Single-field edits
//! - Incomplete-data and characteristic queries
//! - Batch corrections with a single save

mod corrections;
mod request;
mod result;
mod use_case;


pub use corrections::Corrections;
pub use request::AddAnimalRequest;
pub use result::AddAnimalResult;
pub use use_case::AnimalService;
