//! Domain Services
//!
//! Pure business logic that operates on animals.
//! These services have no I/O dependencies and are easily testable.

mod animal_domain_service;

pub use animal_domain_service::{AnimalDomainService, MAX_PETS};
