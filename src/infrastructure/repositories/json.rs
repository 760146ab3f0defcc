//! JSON Animal Repository
//!
//! Keeps the whole collection in memory and persists it as a JSON array
//! on `save_changes`. Writes go through a temp file in the same directory
//! followed by a rename, so a crash never leaves a half-written store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::mapping::restore_animal;
use crate::domain::entities::Animal;
use crate::domain::ports::{AnimalRepository, RepositoryError, RepositoryResult};

/// On-disk shape of one animal. `Species` doubles as the discriminator.
///
/// Every field may be missing or `null`; those load as blank, so the
/// usual sentinels apply and a record without an id is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct JsonAnimalRecord {
    species: Option<String>,
    id: Option<String>,
    age: Option<String>,
    physical_description: Option<String>,
    personality_description: Option<String>,
    nickname: Option<String>,
}

impl From<&Animal> for JsonAnimalRecord {
    fn from(animal: &Animal) -> Self {
        Self {
            species: Some(animal.species().as_str().to_string()),
            id: Some(animal.id().to_string()),
            age: Some(animal.age().to_string()),
            physical_description: Some(animal.physical_description().to_string()),
            personality_description: Some(animal.personality_description().to_string()),
            nickname: Some(animal.nickname().to_string()),
        }
    }
}

impl JsonAnimalRecord {
    fn into_animal(self) -> RepositoryResult<Option<Animal>> {
        restore_animal(
            self.species.as_deref().unwrap_or_default(),
            self.id.as_deref().unwrap_or_default(),
            self.age.as_deref().unwrap_or_default(),
            self.physical_description.as_deref().unwrap_or_default(),
            self.personality_description.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default(),
        )
    }
}

pub struct JsonAnimalRepository {
    path: PathBuf,
    animals: Vec<Animal>,
    dirty: bool,
}

impl JsonAnimalRepository {
    /// Open the store at `path`.
    ///
    /// A missing, empty or unparseable file is treated as "no animals yet",
    /// and single malformed records are skipped with a warning.
    /// Read failures and unknown species discriminators are errors.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let animals = load_from_disk(&path)?;
        tracing::debug!(path = %path.display(), count = animals.len(), "loaded animal store");
        Ok(Self {
            path,
            animals,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.animals.iter().position(|a| a.id() == id)
    }

    fn save_to_disk(&self) -> RepositoryResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(RepositoryError::persistence)?;

        let records: Vec<JsonAnimalRecord> =
            self.animals.iter().map(JsonAnimalRecord::from).collect();
        let content =
            serde_json::to_string_pretty(&records).map_err(RepositoryError::persistence)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(RepositoryError::persistence)?;
        tmp.write_all(content.as_bytes())
            .map_err(RepositoryError::persistence)?;
        tmp.as_file()
            .sync_all()
            .map_err(RepositoryError::persistence)?;
        tmp.persist(&self.path)
            .map_err(|e| RepositoryError::persistence(e.error))?;
        Ok(())
    }
}

fn load_from_disk(path: &Path) -> RepositoryResult<Vec<Animal>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(RepositoryError::persistence(e)),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    // Parse the array first so one malformed record cannot hide the rest.
    let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "animal store is unreadable, starting with no animals"
            );
            return Ok(Vec::new());
        }
    };

    let mut animals: Vec<Animal> = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let record: JsonAnimalRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed stored animal");
                continue;
            }
        };
        let Some(animal) = record.into_animal()? else {
            continue;
        };
        if animals.iter().any(|a| a.id() == animal.id()) {
            tracing::warn!(animal_id = %animal.id(), "ignoring duplicate stored animal");
            continue;
        }
        animals.push(animal);
    }
    Ok(animals)
}

impl AnimalRepository for JsonAnimalRepository {
    fn get_all_animals(&self) -> RepositoryResult<Vec<Animal>> {
        Ok(self.animals.clone())
    }

    fn get_animal_count(&self) -> RepositoryResult<usize> {
        Ok(self.animals.len())
    }

    fn add_animal(&mut self, animal: Animal) -> RepositoryResult<()> {
        if self.position(animal.id().as_str()).is_some() {
            return Err(RepositoryError::DuplicateId {
                id: animal.id().clone(),
            });
        }
        self.animals.push(animal);
        self.dirty = true;
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Animal>> {
        Ok(self.position(id).map(|i| self.animals[i].clone()))
    }

    fn update_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        let index =
            self.position(animal.id().as_str())
                .ok_or_else(|| RepositoryError::NotFound {
                    id: animal.id().clone(),
                })?;
        self.animals[index] = animal.clone();
        self.dirty = true;
        Ok(())
    }

    fn delete_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        if let Some(index) = self.position(animal.id().as_str()) {
            self.animals.remove(index);
            self.dirty = true;
        }
        Ok(())
    }

    fn save_changes(&mut self) -> RepositoryResult<()> {
        if !self.dirty && self.path.exists() {
            return Ok(());
        }
        self.save_to_disk()?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), count = self.animals.len(), "saved animal store");
        Ok(())
    }
}
