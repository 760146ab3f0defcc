//! Every `AnimalRepository` backend behaves the same.

use std::path::Path;

use petfriends::domain::ports::{AnimalRepository, RepositoryError};
use petfriends::infrastructure::{
    InMemoryAnimalRepository, JsonAnimalRepository, SqliteAnimalRepository,
};
use petfriends::Species;
use tempfile::tempdir;

use crate::common::*;

type Open = fn(&Path) -> Box<dyn AnimalRepository>;

fn open_memory(_dir: &Path) -> Box<dyn AnimalRepository> {
    Box::new(InMemoryAnimalRepository::new())
}

fn open_json(dir: &Path) -> Box<dyn AnimalRepository> {
    Box::new(JsonAnimalRepository::open(dir.join("animals.json")).unwrap())
}

fn open_sqlite(dir: &Path) -> Box<dyn AnimalRepository> {
    Box::new(SqliteAnimalRepository::open(&dir.join("animals.db")).unwrap())
}

const BACKENDS: [(&str, Open); 3] = [
    ("memory", open_memory),
    ("json", open_json),
    ("sqlite", open_sqlite),
];

fn ids(repository: &dyn AnimalRepository) -> Vec<String> {
    repository
        .get_all_animals()
        .unwrap()
        .iter()
        .map(|a| a.id().to_string())
        .collect()
}

/// CONTRACT: Animals come back in insertion order with every field intact.
#[test]
fn contract_add_then_read_back() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());

        repository.add_animal(complete_dog("d1")).unwrap();
        repository.add_animal(bare_cat("c2")).unwrap();
        repository.save_changes().unwrap();

        assert_eq!(ids(repository.as_ref()), vec!["d1", "c2"], "{name}");
        assert_eq!(repository.get_animal_count().unwrap(), 2, "{name}");
        assert_eq!(
            repository.get_by_id("d1").unwrap(),
            Some(complete_dog("d1")),
            "{name}"
        );
        assert_eq!(repository.get_by_id("c2").unwrap(), Some(bare_cat("c2")), "{name}");
        assert_eq!(repository.get_by_id("x9").unwrap(), None, "{name}");
    }
}

/// CONTRACT: Ids are unique within a store.
#[test]
fn contract_duplicate_id_is_rejected() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());
        repository.add_animal(complete_dog("d1")).unwrap();

        let err = repository.add_animal(bare_cat("d1")).unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateId { .. }), "{name}");
        assert_eq!(repository.get_animal_count().unwrap(), 1, "{name}");
    }
}

/// CONTRACT: Updating a missing animal fails; deleting one does not.
#[test]
fn contract_update_and_delete_missing() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());

        let err = repository.update_animal(&complete_dog("d7")).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }), "{name}");

        repository.delete_animal(&complete_dog("d7")).unwrap();
    }
}

/// CONTRACT: Updates replace every field and keep the animal's position.
#[test]
fn contract_update_keeps_order() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());
        repository.add_animal(bare_cat("c1")).unwrap();
        repository.add_animal(complete_dog("d2")).unwrap();

        let mut cat = bare_cat("c1");
        cat.set_age("4");
        cat.set_nickname("Tom");
        repository.update_animal(&cat).unwrap();
        repository.save_changes().unwrap();

        assert_eq!(ids(repository.as_ref()), vec!["c1", "d2"], "{name}");
        assert_eq!(repository.get_by_id("c1").unwrap(), Some(cat), "{name}");
    }
}

/// CONTRACT: The three queries agree across backends.
#[test]
fn contract_queries_agree() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());
        repository.add_animal(complete_dog("d1")).unwrap();
        repository.add_animal(bare_cat("c2")).unwrap();
        repository
            .add_animal(animal(Species::Dog, "d3", "?", "Brown spots", "shy", "tbd"))
            .unwrap();
        repository.save_changes().unwrap();

        let incomplete_age = repository
            .get_animals_with_incomplete_age_or_description()
            .unwrap();
        let incomplete_nickname = repository
            .get_animals_with_incomplete_nickname_or_personality()
            .unwrap();
        let brown_dogs = repository
            .get_animals_with_characteristic("DOG", "brown")
            .unwrap();
        let brown_cats = repository
            .get_animals_with_characteristic("cat", "brown")
            .unwrap();

        let as_ids = |animals: Vec<petfriends::Animal>| -> Vec<String> {
            animals.iter().map(|a| a.id().to_string()).collect()
        };
        assert_eq!(as_ids(incomplete_age), vec!["c2", "d3"], "{name}");
        assert_eq!(as_ids(incomplete_nickname), vec!["c2", "d3"], "{name}");
        assert_eq!(as_ids(brown_dogs), vec!["d1", "d3"], "{name}");
        assert!(brown_cats.is_empty(), "{name}");
    }
}

/// CONTRACT: Characteristic search folds case beyond ASCII on every backend.
#[test]
fn contract_characteristic_search_folds_accented_case() {
    for (name, open) in BACKENDS {
        let dir = tempdir().unwrap();
        let mut repository = open(dir.path());
        repository
            .add_animal(animal(Species::Cat, "c1", "3", "ÉLÉGANTE chatte", "calme", "Mimi"))
            .unwrap();
        repository
            .add_animal(animal(Species::Cat, "c2", "1", "tabby", "Très ÉNERGIQUE", "Zaza"))
            .unwrap();
        repository.save_changes().unwrap();

        let elegant = repository
            .get_animals_with_characteristic("cat", "élégante")
            .unwrap();
        let energetic = repository
            .get_animals_with_characteristic("CAT", "énergique")
            .unwrap();

        assert_eq!(elegant.len(), 1, "{name}");
        assert_eq!(elegant[0].id(), "c1", "{name}");
        assert_eq!(energetic.len(), 1, "{name}");
        assert_eq!(energetic[0].id(), "c2", "{name}");
    }
}

/// CONTRACT: File-backed stores survive a reopen.
#[test]
fn contract_file_stores_persist() {
    for (name, open) in &BACKENDS[1..] {
        let dir = tempdir().unwrap();
        {
            let mut repository = open(dir.path());
            repository.add_animal(complete_dog("d1")).unwrap();
            repository.add_animal(bare_cat("c2")).unwrap();
            repository.delete_animal(&complete_dog("d1")).unwrap();
            repository.save_changes().unwrap();
        }

        let repository = open(dir.path());
        assert_eq!(ids(repository.as_ref()), vec!["c2"], "{name}");
        assert_eq!(repository.get_by_id("c2").unwrap(), Some(bare_cat("c2")), "{name}");
    }
}
