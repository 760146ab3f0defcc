//! Starter animals for a fresh store.

use crate::domain::entities::Animal;
use crate::domain::ports::{AnimalRepository, RepositoryResult};
use crate::domain::value_objects::{AnimalId, Species};

struct Starter {
    species: Species,
    id: &'static str,
    age: &'static str,
    physical_description: &'static str,
    personality_description: &'static str,
    nickname: &'static str,
}

const STARTERS: [Starter; 4] = [
    Starter {
        species: Species::Dog,
        id: "d1",
        age: "2",
        physical_description: "medium sized cream colored female golden retriever weighing about 65 pounds. housebroken.",
        personality_description: "loves to have her belly rubbed and likes to chase her tail. gives lots of kisses.",
        nickname: "lola",
    },
    Starter {
        species: Species::Dog,
        id: "d2",
        age: "9",
        physical_description: "large reddish-brown male golden retriever weighing about 85 pounds. housebroken.",
        personality_description: "loves to have his ears rubbed when he greets you at the door, or at any time! loves to lean-in and give doggy hugs.",
        nickname: "loki",
    },
    Starter {
        species: Species::Cat,
        id: "c3",
        age: "1",
        physical_description: "small white female weighing about 8 pounds. litter box trained.",
        personality_description: "friendly",
        nickname: "Puss",
    },
    Starter {
        species: Species::Cat,
        id: "c4",
        age: "?",
        physical_description: "",
        personality_description: "",
        nickname: "",
    },
];

/// The four animals a new store starts with.
pub fn starter_animals() -> Vec<Animal> {
    STARTERS
        .iter()
        .filter_map(|s| {
            let id = AnimalId::new(s.id).ok()?;
            Some(Animal::new(
                s.species,
                id,
                s.age,
                s.physical_description,
                s.personality_description,
                s.nickname,
            ))
        })
        .collect()
}

/// Insert the starter animals when `repository` holds none.
///
/// Returns how many animals were inserted; zero when the store already had data.
pub fn seed_if_empty<R>(repository: &mut R) -> RepositoryResult<usize>
where
    R: AnimalRepository + ?Sized,
{
    if repository.get_animal_count()? > 0 {
        return Ok(0);
    }

    let animals = starter_animals();
    let count = animals.len();
    for animal in animals {
        repository.add_animal(animal)?;
    }
    repository.save_changes()?;

    tracing::info!(count, "seeded empty store with starter animals");
    Ok(count)
}
