//! Domain Layer
//!
//! The heart of PetFriends: animals, their construction rules, and the
//! ports through which they are persisted. Nothing in here touches I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (AnimalId, Species)
//! - `entities/` - The Animal aggregate and its builder
//! - `services/` - Validation and id generation for new animals
//! - `ports/` - Repository interface implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or a database
//! 2. **Classify, don't format** - Errors describe what went wrong; the
//!    presentation layer decides how to phrase it
//! 3. **Ports & Adapters** - All persistence goes through `AnimalRepository`

pub mod entities;
mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use errors::AnimalError;
