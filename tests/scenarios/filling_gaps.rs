//! A volunteer fills in the details missing from incomplete records.

use petfriends::infrastructure::{seed_if_empty, InMemoryAnimalRepository};
use petfriends::{AnimalService, Corrections};

use crate::common::*;

fn corrections(entries: &[(&str, &str, &str)]) -> Corrections {
    entries
        .iter()
        .map(|(id, a, b)| (id.to_string(), (a.to_string(), b.to_string())))
        .collect()
}

#[test]
fn starter_data_has_one_gap_of_each_kind() {
    let mut repository = InMemoryAnimalRepository::new();
    seed_if_empty(&mut repository).unwrap();
    let service = AnimalService::new(repository);

    let ages = service
        .get_animals_with_incomplete_age_or_description()
        .unwrap();
    let nicknames = service
        .get_animals_with_incomplete_nickname_or_personality()
        .unwrap();

    assert_eq!(ages.len(), 1);
    assert_eq!(ages[0].id().as_str(), "c4");
    assert_eq!(nicknames.len(), 1);
    assert_eq!(nicknames[0].id().as_str(), "c4");
}

#[test]
fn batch_of_corrections_is_saved_once() {
    let mut service = AnimalService::new(InMemoryAnimalRepository::with_animals([
        bare_cat("c1"),
        bare_cat("c2"),
        complete_dog("d3"),
    ]));

    let updated = service
        .complete_nicknames_and_personality(&corrections(&[
            ("c1", "Misty", "calm"),
            ("c2", "Shadow", "playful"),
            ("zz", "Ghost", "unknown"),
        ]))
        .unwrap();

    assert_eq!(updated, 2);
    assert_eq!(service.repository().save_count(), 1);
    assert!(service
        .get_animals_with_incomplete_nickname_or_personality()
        .unwrap()
        .is_empty());
}

#[test]
fn completing_ages_via_piped_menu() {
    let env = TestEnv::new();

    let result = env.run_with_input(&[], "3\n5\nsmall grey tabby\n0\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains("Age and physical description information is complete for all animals."));

    let listed = env.run(&["list"]);
    assert!(listed.stdout.contains("Physical Description: small grey tabby"));
}

#[test]
fn completing_nicknames_with_blank_answers_changes_nothing() {
    let env = TestEnv::new();

    let result = env.run_with_input(&["complete-nicknames"], "\n\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains("Nothing was entered, no animals were changed."));
}
