//! A volunteer opens the app for the first time and works through the menu.

use crate::common::*;

#[test]
fn first_run_seeds_and_lists_starters() {
    let env = TestEnv::new();

    let result = env.run(&["list"]);

    assert!(result.success, "stderr: {}", result.stderr);
    for id in ["d1", "d2", "c3", "c4"] {
        assert!(result.stdout.contains(&format!("ID: {id}")), "missing {id}");
    }
    let stored = env.read_file("animals.json");
    assert!(stored.contains("\"Nickname\": \"lola\""), "{stored}");
}

#[test]
fn menu_add_then_list_then_exit() {
    let env = TestEnv::new();
    let input = "2\ncat\n2\nblack with white paws\nsleepy\nSocks\nn\n1\n0\n";

    let result = env.run_with_input(&[], input);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("Welcome to the PetFriends app."));
    assert!(result
        .stdout
        .contains("Successfully added new cat with ID: c5"));
    assert!(result.stdout.contains("Nickname: Socks"));
    assert!(result.stdout.trim_end().ends_with("Goodbye!"));

    // The addition survived the process.
    let relisted = env.run(&["list"]);
    assert!(relisted.stdout.contains("ID: c5"));
}

#[test]
fn menu_survives_invalid_choices() {
    let env = TestEnv::new();

    let result = env.run_with_input(&[], "42\nlist\n0\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result
            .stdout
            .matches("Invalid option. Please try again.")
            .count(),
        2
    );
}

#[test]
fn menu_input_ending_early_is_an_error() {
    let env = TestEnv::new();

    let result = env.run_with_input(&[], "1\n");

    assert!(!result.success);
    assert!(result.stderr.contains("input ended"));
}

#[test]
fn subcommands_edit_search_and_remove() {
    let env = TestEnv::new();

    let edited = env.run(&["edit-age", "d2", "10"]);
    assert!(edited.success, "stderr: {}", edited.stderr);
    assert!(edited.stdout.contains("Updated age for d2 to 10."));

    let personality = env.run(&["edit-personality", "c3", "curious and bold"]);
    assert!(personality.stdout.contains("Personality updated successfully."));

    let search = env.run(&["search", "cat", "BOLD"]);
    assert!(search.stdout.contains("cats with characteristic 'BOLD':"));
    assert!(search.stdout.contains("ID: c3"));

    let removed = env.run(&["remove", "d1"]);
    assert!(removed.stdout.contains("Removed animal d1."));

    let listed = env.run(&["list"]);
    assert!(!listed.stdout.contains("ID: d1"));
    assert!(listed.stdout.contains("Age: 10"));
}

#[test]
fn add_with_unknown_species_exits_nonzero() {
    let env = TestEnv::new();

    let result = env.run(&["add", "parrot", "--nickname", "Polly"]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stdout
        .contains("Failed to add new animal: Invalid input. Please enter 'dog' or 'cat'."));
}
