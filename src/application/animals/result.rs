//! Add-animal result types

use crate::domain::entities::Animal;
use crate::domain::AnimalError;

/// Outcome of an add request.
///
/// Validation rejections (unsupported species, pet limit) land here
/// rather than in `Err`, so the caller can show them and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAnimalResult {
    pub success: bool,
    pub error: Option<AnimalError>,
    pub animal: Option<Animal>,
}

impl AddAnimalResult {
    pub fn accepted(animal: Animal) -> Self {
        Self {
            success: true,
            error: None,
            animal: Some(animal),
        }
    }

    pub fn rejected(error: AnimalError) -> Self {
        Self {
            success: false,
            error: Some(error),
            animal: None,
        }
    }
}
