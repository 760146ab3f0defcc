//! The shelter fills up and turns new arrivals away.

use petfriends::infrastructure::InMemoryAnimalRepository;
use petfriends::{AddAnimalRequest, AnimalError, AnimalService};

use crate::common::*;

#[test]
fn ninth_animal_is_turned_away() {
    let mut service = AnimalService::new(InMemoryAnimalRepository::new());

    for expected in ["d1", "c2", "d3", "c4", "d5", "c6", "d7", "c8"] {
        let species = if expected.starts_with('d') { "dog" } else { "cat" };
        let result = service
            .add_new_animal(&AddAnimalRequest::new(species).nickname("Pal"))
            .unwrap();
        assert_eq!(result.animal.unwrap().id().as_str(), expected);
    }

    let result = service
        .add_new_animal(&AddAnimalRequest::new("dog"))
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.error, Some(AnimalError::PetLimitReached { max: 8 }));
    assert_eq!(service.animal_count().unwrap(), 8);
    assert_eq!(service.repository().save_count(), 8);
}

#[test]
fn removing_one_makes_room_with_a_fresh_id() {
    let animals = (1..=8).map(|i| complete_dog(&format!("d{i}")));
    let mut service = AnimalService::new(InMemoryAnimalRepository::with_animals(animals));

    assert!(service.remove_animal("d3").unwrap());
    let result = service
        .add_new_animal(&AddAnimalRequest::new("dog"))
        .unwrap();

    // Count is 7 again, but d8 is still taken.
    assert_eq!(result.animal.unwrap().id().as_str(), "d9");
}

#[test]
fn full_shelter_via_menu() {
    let env = TestEnv::new();
    for species in ["dog", "cat", "dog", "cat"] {
        assert!(env.run(&["add", species]).success);
    }

    let result = env.run_with_input(&[], "2\n0\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains("We have reached our limit on the number of pets that we can manage."));
}
