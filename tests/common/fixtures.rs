//! Test fixtures - animals in known states.

use petfriends::{Animal, AnimalId, Species};

pub fn animal(
    species: Species,
    id: &str,
    age: &str,
    physical: &str,
    personality: &str,
    nickname: &str,
) -> Animal {
    Animal::new(
        species,
        AnimalId::new(id).expect("fixture ids are never blank"),
        age,
        physical,
        personality,
        nickname,
    )
}

/// A dog with every field filled in.
pub fn complete_dog(id: &str) -> Animal {
    animal(Species::Dog, id, "2", "brown terrier", "fetches", "Rex")
}

/// A cat with nothing but its id.
pub fn bare_cat(id: &str) -> Animal {
    animal(Species::Cat, id, "", "", "", "")
}
