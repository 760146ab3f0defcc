//! User-facing text
//!
//! Every line the console prints to the user comes from here.

use crate::domain::services::MAX_PETS;

pub const WELCOME: &str = "Welcome to the PetFriends app. Your main menu options are:";
pub const MENU_PROMPT: &str = "Enter your selection number (or 0 to exit the program)";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const GOODBYE: &str = "Goodbye!";
pub const ANIMAL_NOT_FOUND: &str = "Animal not found.";
pub const NO_ANIMALS_FOUND: &str = "No animals found.";

pub const ENTER_SPECIES: &str = "Enter 'dog' or 'cat' to begin a new entry";
pub const INVALID_SPECIES: &str = "Invalid input. Please enter 'dog' or 'cat'.";
pub const PET_LIMIT_REACHED: &str =
    "We have reached our limit on the number of pets that we can manage.";
pub const ADD_ANOTHER_PET: &str = "Do you want to enter info for another pet (y/n)";
pub const INVALID_YES_NO: &str = "Invalid input. Please enter 'y' or 'n'.";

pub const AGE_AND_DESCRIPTION_COMPLETE: &str =
    "Age and physical description information is complete for all animals.";
pub const NICKNAME_AND_PERSONALITY_COMPLETE: &str =
    "Nickname and personality information is complete for all animals.";
pub const NOTHING_ENTERED: &str = "Nothing was entered, no animals were changed.";
pub const PERSONALITY_UPDATED: &str = "Personality updated successfully.";
pub const ENTER_ID_TO_REMOVE: &str = "Enter the ID of the animal to remove:";

pub fn current_pets_status(count: usize) -> String {
    format!(
        "We currently have {} pets that need homes. We can manage {} more.",
        count,
        MAX_PETS.saturating_sub(count)
    )
}

pub fn age_prompt(id: &str) -> String {
    format!("Enter an age for the animal {} or '?' if unknown", id)
}

pub fn physical_description_prompt(id: &str) -> String {
    format!(
        "Enter a physical description for the animal {} (size, color, breed, gender, weight, housebroken)",
        id
    )
}

pub fn personality_description_prompt(id: &str) -> String {
    format!(
        "Enter a personality description for the animal {} (likes or dislikes, tricks, energy level)",
        id
    )
}

pub fn nickname_prompt(id: &str) -> String {
    format!("Enter a nickname for the animal {} or tbd if unknown", id)
}

pub fn complete_age_prompt(id: &str, species: &str) -> String {
    format!("Please enter an age for {} ({})", id, species)
}

pub fn complete_physical_description_prompt(id: &str, current: &str) -> String {
    format!("Please enter a physical description for {} ({})", id, current)
}

pub fn animal_added(species: &str, id: &str) -> String {
    format!("Successfully added new {} with ID: {}", species, id)
}

pub fn animal_not_added(reason: &str) -> String {
    format!("Failed to add new animal: {}", reason)
}

pub fn animal_removed(id: &str) -> String {
    format!("Removed animal {}.", id)
}

pub fn enter_animal_id(field: &str) -> String {
    format!("Enter the ID of the animal whose {} you want to edit:", field)
}

pub fn current_age(id: &str, age: &str) -> String {
    format!("Current age for {} is {}.\nEnter new age or '?' if unknown:", id, age)
}

pub fn updated_age(id: &str, age: &str) -> String {
    format!("Updated age for {} to {}.", id, age)
}

pub fn current_personality(id: &str, personality: &str) -> String {
    format!("Current personality for {}: {}\nEnter new personality description:", id, personality)
}

pub fn characteristic_search_prompt(species: &str) -> String {
    format!("Enter the characteristic to search for in {}s:", species)
}

pub fn characteristic_results(species: &str, characteristic: &str) -> String {
    format!("{}s with characteristic '{}':", species, characteristic)
}

pub fn no_characteristic_match(species: &str, characteristic: &str) -> String {
    format!("No {}s found with characteristic '{}'.", species, characteristic)
}

pub fn batch_not_applied(reason: &str) -> String {
    format!("No changes were saved: {}", reason)
}

pub fn animals_updated(count: usize) -> String {
    format!("Updated {} animal(s). Some information is still missing.", count)
}

pub fn command_failed(reason: &str) -> String {
    format!("Something went wrong: {}", reason)
}
