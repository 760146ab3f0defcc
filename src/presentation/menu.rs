//! Main menu options

use crate::domain::value_objects::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListAllAnimals,
    AddNewAnimal,
    EnsureAgesAndDescriptionsComplete,
    EnsureNicknamesAndPersonalityComplete,
    EditAnimalAge,
    EditAnimalPersonality,
    DisplayWithCharacteristic(Species),
    Exit,
}

impl MenuOption {
    /// Display order; `Exit` comes last.
    pub const ALL: [MenuOption; 9] = [
        MenuOption::ListAllAnimals,
        MenuOption::AddNewAnimal,
        MenuOption::EnsureAgesAndDescriptionsComplete,
        MenuOption::EnsureNicknamesAndPersonalityComplete,
        MenuOption::EditAnimalAge,
        MenuOption::EditAnimalPersonality,
        MenuOption::DisplayWithCharacteristic(Species::Cat),
        MenuOption::DisplayWithCharacteristic(Species::Dog),
        MenuOption::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::ListAllAnimals => "1. List all of our current pet information",
            MenuOption::AddNewAnimal => "2. Add a new animal friend to the application",
            MenuOption::EnsureAgesAndDescriptionsComplete => {
                "3. Ensure animal ages and physical descriptions are complete"
            }
            MenuOption::EnsureNicknamesAndPersonalityComplete => {
                "4. Ensure animal nicknames and personality descriptions are complete"
            }
            MenuOption::EditAnimalAge => "5. Edit an animal's age",
            MenuOption::EditAnimalPersonality => "6. Edit an animal's personality description",
            MenuOption::DisplayWithCharacteristic(Species::Cat) => {
                "7. Display all cats with a specified characteristic"
            }
            MenuOption::DisplayWithCharacteristic(Species::Dog) => {
                "8. Display all dogs with a specified characteristic"
            }
            MenuOption::Exit => "0. Exit the application",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|o| o.label().to_string()).collect()
    }
}
