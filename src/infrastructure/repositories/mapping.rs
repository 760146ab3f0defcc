//! Stored record → domain mapping shared by the persistent repositories.

use crate::domain::entities::Animal;
use crate::domain::ports::{RepositoryError, RepositoryResult};
use crate::domain::value_objects::{AnimalId, Species};

/// Rebuild an animal from stored columns.
///
/// `discriminator` selects the variant and must be `dog` or `cat`
/// (any case); anything else is `UnknownSpecies`. Records with a blank id
/// are stray rows and map to `None`.
pub(super) fn restore_animal(
    discriminator: &str,
    id: &str,
    age: &str,
    physical_description: &str,
    personality_description: &str,
    nickname: &str,
) -> RepositoryResult<Option<Animal>> {
    let species = Species::parse(discriminator).ok_or_else(|| RepositoryError::UnknownSpecies {
        species: discriminator.to_string(),
    })?;

    let Ok(id) = AnimalId::new(id) else {
        tracing::warn!(species = %species, "skipping stored animal without an id");
        return Ok(None);
    };

    Ok(Some(Animal::new(
        species,
        id,
        age,
        physical_description,
        personality_description,
        nickname,
    )))
}
