//! Output Rendering
//!
//! Turns animals into the text blocks the console prints.

use crate::domain::entities::Animal;

/// One block per animal, separated by a blank line. Empty for no animals.
pub fn render_animals(animals: &[Animal]) -> String {
    animals
        .iter()
        .map(Animal::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
