//! Batch correction planning
//!
//! Works out every change up front, on copies, so that a rejected batch
//! leaves the store untouched.

use std::collections::BTreeMap;

use crate::application::errors::{ApplicationError, ApplicationResult};
use crate::domain::entities::Animal;

/// Candidate values per animal id, applied in id order.
pub type Corrections = BTreeMap<String, (String, String)>;

/// Build the updated copies for a batch.
///
/// `lookup` resolves an id to the stored animal; unknown ids are skipped.
/// `apply` writes the non-empty candidates into the copy and reports whether
/// it changed anything.
pub(super) fn plan_corrections<L, A>(
    corrections: &Corrections,
    mut lookup: L,
    apply: A,
) -> ApplicationResult<Vec<Animal>>
where
    L: FnMut(&str) -> ApplicationResult<Option<Animal>>,
    A: Fn(&mut Animal, &str, &str) -> bool,
{
    if corrections.is_empty() {
        return Err(ApplicationError::NoCorrectionsProvided);
    }

    let mut updated = Vec::with_capacity(corrections.len());
    for (id, (first, second)) in corrections {
        let Some(mut animal) = lookup(id)? else {
            tracing::debug!(animal_id = %id, "skipping correction for unknown animal");
            continue;
        };
        if !apply(&mut animal, first, second) {
            tracing::warn!(animal_id = %id, "no valid modifications provided for animal");
            return Err(ApplicationError::NoValidModifications { id: id.clone() });
        }
        updated.push(animal);
    }

    if updated.is_empty() {
        return Err(ApplicationError::NoAnimalsFound);
    }
    Ok(updated)
}

/// Set `age` and physical description where non-empty.
pub(super) fn apply_age_and_description(animal: &mut Animal, age: &str, physical: &str) -> bool {
    let mut changed = false;
    if !age.trim().is_empty() {
        animal.set_age(age);
        changed = true;
    }
    if !physical.trim().is_empty() {
        animal.set_physical_description(physical);
        changed = true;
    }
    changed
}

/// Set nickname and personality where non-empty.
pub(super) fn apply_nickname_and_personality(
    animal: &mut Animal,
    nickname: &str,
    personality: &str,
) -> bool {
    let mut changed = false;
    if !nickname.trim().is_empty() {
        animal.set_nickname(nickname);
        changed = true;
    }
    if !personality.trim().is_empty() {
        animal.set_personality_description(personality);
        changed = true;
    }
    changed
}
