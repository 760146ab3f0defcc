//! Console commands
//!
//! One function per menu entry. Subcommands reuse them, passing the values
//! given on the command line so only the missing ones are prompted for.

use anyhow::Result;

use crate::application::{
    AddAnimalRequest, AnimalService, ApplicationError, ApplicationResult, Corrections,
};
use crate::domain::entities::{Animal, DEFAULT_VALUE, UNKNOWN_AGE};
use crate::domain::ports::AnimalRepository;
use crate::domain::services::MAX_PETS;
use crate::domain::value_objects::Species;
use crate::domain::AnimalError;

use super::console::Console;
use super::menu::MenuOption;
use super::messages;
use super::output::render_animals;

/// Print every animal, or a notice when there are none.
pub fn list_all<R, C>(service: &AnimalService<R>, console: &mut C) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let animals = service.list_all()?;
    if animals.is_empty() {
        console.print_line(messages::NO_ANIMALS_FOUND)?;
    } else {
        console.print_line(&render_animals(&animals))?;
    }
    Ok(())
}

/// Add one animal and report the outcome. Returns whether it was stored.
pub fn add_animal<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
    request: &AddAnimalRequest,
) -> Result<bool>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let result = service.add_new_animal(request)?;
    match (result.animal, result.error) {
        (Some(animal), _) => {
            console.print_line(&messages::animal_added(
                animal.species().as_str(),
                animal.id().as_str(),
            ))?;
            Ok(true)
        }
        (None, Some(error)) => {
            console.print_line(&messages::animal_not_added(&rejection_text(&error)))?;
            Ok(false)
        }
        (None, None) => Ok(false),
    }
}

fn rejection_text(error: &AnimalError) -> String {
    match error {
        AnimalError::InvalidSpecies { .. } => messages::INVALID_SPECIES.to_string(),
        AnimalError::PetLimitReached { .. } => messages::PET_LIMIT_REACHED.to_string(),
        other => other.to_string(),
    }
}

/// Prompt for new animals until the user stops or the shelter is full.
pub fn add_animals<R, C>(service: &mut AnimalService<R>, console: &mut C) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let mut count = service.animal_count()?;
    if count >= MAX_PETS {
        console.print_line(messages::PET_LIMIT_REACHED)?;
        return Ok(());
    }
    console.print_line(&messages::current_pets_status(count))?;

    loop {
        let answer = console.read_line(messages::ENTER_SPECIES)?;
        let Some(species) = Species::parse(answer.trim()) else {
            console.print_line(messages::INVALID_SPECIES)?;
            continue;
        };

        let id = service.next_id(species.as_str())?;
        let request = AddAnimalRequest::new(species.as_str())
            .age(console.read_line(&messages::age_prompt(&id))?)
            .physical_description(console.read_line(&messages::physical_description_prompt(&id))?)
            .personality_description(
                console.read_line(&messages::personality_description_prompt(&id))?,
            )
            .nickname(console.read_line(&messages::nickname_prompt(&id))?);

        if add_animal(service, console, &request)? {
            count += 1;
        }

        if count >= MAX_PETS {
            console.print_line(messages::PET_LIMIT_REACHED)?;
            return Ok(());
        }
        if !ask_yes_no(console, messages::ADD_ANOTHER_PET)? {
            return Ok(());
        }
    }
}

fn ask_yes_no<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool> {
    loop {
        match console.read_line(prompt)?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => console.print_line(messages::INVALID_YES_NO)?,
        }
    }
}

/// Ask for every missing age and physical description, then save them in one batch.
pub fn ensure_ages_and_descriptions<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let incomplete = service.get_animals_with_incomplete_age_or_description()?;
    if incomplete.is_empty() {
        console.print_line(messages::AGE_AND_DESCRIPTION_COMPLETE)?;
        return Ok(());
    }

    let mut corrections = Corrections::new();
    for animal in &incomplete {
        let id = animal.id().as_str();
        let age = if missing(animal.age(), UNKNOWN_AGE) {
            console.read_line(&messages::complete_age_prompt(id, animal.species().as_str()))?
        } else {
            String::new()
        };
        let physical = if missing(animal.physical_description(), DEFAULT_VALUE) {
            console.read_line(&messages::complete_physical_description_prompt(
                id,
                animal.physical_description(),
            ))?
        } else {
            String::new()
        };
        collect(&mut corrections, animal, age, physical);
    }

    let outcome = service.complete_ages_and_descriptions(&corrections);
    report_batch(
        console,
        outcome,
        service.get_animals_with_incomplete_age_or_description()?,
        messages::AGE_AND_DESCRIPTION_COMPLETE,
    )
}

/// Ask for every missing nickname and personality, then save them in one batch.
pub fn ensure_nicknames_and_personality<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let incomplete = service.get_animals_with_incomplete_nickname_or_personality()?;
    if incomplete.is_empty() {
        console.print_line(messages::NICKNAME_AND_PERSONALITY_COMPLETE)?;
        return Ok(());
    }

    let mut corrections = Corrections::new();
    for animal in &incomplete {
        let id = animal.id().as_str();
        let nickname = if missing(animal.nickname(), DEFAULT_VALUE) {
            console.read_line(&messages::nickname_prompt(id))?
        } else {
            String::new()
        };
        let personality = if missing(animal.personality_description(), DEFAULT_VALUE) {
            console.read_line(&messages::personality_description_prompt(id))?
        } else {
            String::new()
        };
        collect(&mut corrections, animal, nickname, personality);
    }

    let outcome = service.complete_nicknames_and_personality(&corrections);
    report_batch(
        console,
        outcome,
        service.get_animals_with_incomplete_nickname_or_personality()?,
        messages::NICKNAME_AND_PERSONALITY_COMPLETE,
    )
}

fn missing(value: &str, sentinel: &str) -> bool {
    value.trim().is_empty() || value == sentinel
}

/// Keep an entry only when the user typed something for it.
fn collect(corrections: &mut Corrections, animal: &Animal, first: String, second: String) {
    if first.trim().is_empty() && second.trim().is_empty() {
        return;
    }
    corrections.insert(animal.id().to_string(), (first, second));
}

fn report_batch<C: Console + ?Sized>(
    console: &mut C,
    outcome: ApplicationResult<usize>,
    still_incomplete: Vec<Animal>,
    complete_message: &str,
) -> Result<()> {
    match outcome {
        Ok(count) if still_incomplete.is_empty() => {
            tracing::debug!(count, "batch left no incomplete animals");
            console.print_line(complete_message)?;
        }
        Ok(count) => console.print_line(&messages::animals_updated(count))?,
        Err(ApplicationError::NoCorrectionsProvided) => {
            console.print_line(messages::NOTHING_ENTERED)?
        }
        Err(
            error @ (ApplicationError::NoAnimalsFound
            | ApplicationError::NoValidModifications { .. }),
        ) => console.print_line(&messages::batch_not_applied(&error.to_string()))?,
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

/// Change one animal's age. Missing arguments are prompted for.
pub fn edit_age<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
    id: Option<&str>,
    age: Option<&str>,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let id = match id {
        Some(id) => id.to_string(),
        None => console.read_line(&messages::enter_animal_id("age"))?,
    };
    let Some(animal) = service.get_animal_by_id(&id)? else {
        console.print_line(messages::ANIMAL_NOT_FOUND)?;
        return Ok(());
    };

    let age = match age {
        Some(age) => age.to_string(),
        None => console.read_line(&messages::current_age(animal.id().as_str(), animal.age()))?,
    };

    if service.update_animal_age(animal.id().as_str(), &age)? {
        let stored = service.get_animal_by_id(animal.id().as_str())?;
        let shown = stored.as_ref().map_or(age.as_str(), |a| a.age());
        console.print_line(&messages::updated_age(animal.id().as_str(), shown))?;
    } else {
        console.print_line(messages::ANIMAL_NOT_FOUND)?;
    }
    Ok(())
}

/// Change one animal's personality description. Missing arguments are prompted for.
pub fn edit_personality<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
    id: Option<&str>,
    personality: Option<&str>,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let id = match id {
        Some(id) => id.to_string(),
        None => console.read_line(&messages::enter_animal_id("personality"))?,
    };
    let Some(animal) = service.get_animal_by_id(&id)? else {
        console.print_line(messages::ANIMAL_NOT_FOUND)?;
        return Ok(());
    };

    let personality = match personality {
        Some(personality) => personality.to_string(),
        None => console.read_line(&messages::current_personality(
            animal.id().as_str(),
            animal.personality_description(),
        ))?,
    };

    if service.update_animal_personality(animal.id().as_str(), &personality)? {
        console.print_line(messages::PERSONALITY_UPDATED)?;
    } else {
        console.print_line(messages::ANIMAL_NOT_FOUND)?;
    }
    Ok(())
}

/// List animals of `species` whose descriptions mention a characteristic.
pub fn display_with_characteristic<R, C>(
    service: &AnimalService<R>,
    console: &mut C,
    species: Species,
    characteristic: Option<&str>,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let characteristic = match characteristic {
        Some(characteristic) => characteristic.to_string(),
        None => console.read_line(&messages::characteristic_search_prompt(species.as_str()))?,
    };
    let characteristic = characteristic.trim();

    let animals = service.get_animals_with_characteristic(species.as_str(), characteristic)?;
    if animals.is_empty() {
        console.print_line(&messages::no_characteristic_match(
            species.as_str(),
            characteristic,
        ))?;
    } else {
        console.print_line(&messages::characteristic_results(
            species.as_str(),
            characteristic,
        ))?;
        console.blank_line()?;
        console.print_line(&render_animals(&animals))?;
    }
    Ok(())
}

/// Delete one animal by id.
pub fn remove_animal<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
    id: Option<&str>,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    let id = match id {
        Some(id) => id.to_string(),
        None => console.read_line(messages::ENTER_ID_TO_REMOVE)?,
    };
    if service.remove_animal(&id)? {
        console.print_line(&messages::animal_removed(id.trim()))?;
    } else {
        console.print_line(messages::ANIMAL_NOT_FOUND)?;
    }
    Ok(())
}

/// Show the main menu until the user exits.
///
/// A failing command is reported and the menu shown again; failing to
/// read the menu choice itself (e.g. end of input) ends the loop.
pub fn run_menu<R, C>(service: &mut AnimalService<R>, console: &mut C) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    console.print_line(messages::WELCOME)?;
    let labels = MenuOption::labels();

    loop {
        console.blank_line()?;
        let Some(index) = console.select(messages::MENU_PROMPT, &labels)? else {
            console.print_line(messages::INVALID_OPTION)?;
            continue;
        };
        let option = MenuOption::ALL[index];
        tracing::info!(option = option.label(), "menu selection");

        if option == MenuOption::Exit {
            console.print_line(messages::GOODBYE)?;
            return Ok(());
        }

        console.blank_line()?;
        if let Err(error) = run_option(service, console, option) {
            tracing::error!(error = %error, "command failed");
            console.print_line(&messages::command_failed(&format!("{error:#}")))?;
        }
    }
}

fn run_option<R, C>(
    service: &mut AnimalService<R>,
    console: &mut C,
    option: MenuOption,
) -> Result<()>
where
    R: AnimalRepository,
    C: Console + ?Sized,
{
    match option {
        MenuOption::ListAllAnimals => list_all(service, console),
        MenuOption::AddNewAnimal => add_animals(service, console),
        MenuOption::EnsureAgesAndDescriptionsComplete => {
            ensure_ages_and_descriptions(service, console)
        }
        MenuOption::EnsureNicknamesAndPersonalityComplete => {
            ensure_nicknames_and_personality(service, console)
        }
        MenuOption::EditAnimalAge => edit_age(service, console, None, None),
        MenuOption::EditAnimalPersonality => edit_personality(service, console, None, None),
        MenuOption::DisplayWithCharacteristic(species) => {
            display_with_characteristic(service, console, species, None)
        }
        MenuOption::Exit => Ok(()),
    }
}
