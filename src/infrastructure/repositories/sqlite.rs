//! SQLite Animal Repository
//!
//! Relational store with one `animals` table. Every mutating call runs in
//! its own transaction, so `save_changes` has nothing left to do. The
//! `discriminator` column decides which variant is rebuilt on read.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::mapping::restore_animal;
use crate::domain::entities::Animal;
use crate::domain::ports::{AnimalRepository, RepositoryError, RepositoryResult};
use crate::domain::value_objects::Species;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS animals (
    id VARCHAR(10) PRIMARY KEY,
    species VARCHAR(50) NOT NULL,
    age VARCHAR(10),
    physical_description TEXT,
    personality_description TEXT,
    nickname VARCHAR(50),
    discriminator VARCHAR(20) NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_species ON animals(species);
CREATE INDEX IF NOT EXISTS idx_discriminator ON animals(discriminator);
";

const SELECT_COLUMNS: &str = "SELECT discriminator, id, age, physical_description, \
     personality_description, nickname FROM animals";

/// Raw column values of one row, before domain validation.
struct AnimalRow {
    discriminator: String,
    id: String,
    age: Option<String>,
    physical_description: Option<String>,
    personality_description: Option<String>,
    nickname: Option<String>,
}

impl AnimalRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            discriminator: row.get(0)?,
            id: row.get(1)?,
            age: row.get(2)?,
            physical_description: row.get(3)?,
            personality_description: row.get(4)?,
            nickname: row.get(5)?,
        })
    }

    fn into_animal(self) -> RepositoryResult<Option<Animal>> {
        restore_animal(
            &self.discriminator,
            &self.id,
            self.age.as_deref().unwrap_or_default(),
            self.physical_description.as_deref().unwrap_or_default(),
            self.personality_description.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default(),
        )
    }
}

pub struct SqliteAnimalRepository {
    conn: Connection,
}

impl SqliteAnimalRepository {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &Path) -> RepositoryResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(RepositoryError::persistence)?;
            }
        }
        let conn = Connection::open(path).map_err(RepositoryError::persistence)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> RepositoryResult<Self> {
        let conn = Connection::open_in_memory().map_err(RepositoryError::persistence)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> RepositoryResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(RepositoryError::persistence)?;
        tracing::debug!("animals table ensured");
        Ok(Self { conn })
    }

    /// Run `sql` (a WHERE/ORDER tail appended to the column list) and map rows.
    fn query(&self, tail: &str, params: impl rusqlite::Params) -> RepositoryResult<Vec<Animal>> {
        let sql = format!("{SELECT_COLUMNS} {tail}");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(RepositoryError::persistence)?;
        let rows = stmt
            .query_map(params, AnimalRow::from_row)
            .map_err(RepositoryError::persistence)?;

        let mut animals = Vec::new();
        for row in rows {
            let row = row.map_err(RepositoryError::persistence)?;
            if let Some(animal) = row.into_animal()? {
                animals.push(animal);
            }
        }
        Ok(animals)
    }
}

impl AnimalRepository for SqliteAnimalRepository {
    // Blank ids are dropped by `restore_animal`, so listing and the default
    // count agree on what counts as stored.
    fn get_all_animals(&self) -> RepositoryResult<Vec<Animal>> {
        self.query("ORDER BY rowid", [])
    }

    fn add_animal(&mut self, animal: Animal) -> RepositoryResult<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(RepositoryError::persistence)?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM animals WHERE id = ?1",
                params![animal.id().as_str()],
                |_| Ok(()),
            )
            .optional()
            .map_err(RepositoryError::persistence)?
            .is_some();
        if exists {
            return Err(RepositoryError::DuplicateId {
                id: animal.id().clone(),
            });
        }

        let now = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT INTO animals (id, species, age, physical_description, \
             personality_description, nickname, discriminator, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                animal.id().as_str(),
                animal.species().as_str(),
                animal.age(),
                animal.physical_description(),
                animal.personality_description(),
                animal.nickname(),
                animal.species().as_str(),
                now,
            ],
        )
        .map_err(RepositoryError::persistence)?;

        tx.commit().map_err(RepositoryError::persistence)?;
        tracing::debug!(animal_id = %animal.id(), "inserted animal row");
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Animal>> {
        Ok(self.query("WHERE id = ?1", params![id])?.into_iter().next())
    }

    fn update_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(RepositoryError::persistence)?;

        let changed = tx
            .execute(
                "UPDATE animals SET species = ?2, age = ?3, physical_description = ?4, \
                 personality_description = ?5, nickname = ?6, discriminator = ?2, \
                 updated_at = ?7 WHERE id = ?1",
                params![
                    animal.id().as_str(),
                    animal.species().as_str(),
                    animal.age(),
                    animal.physical_description(),
                    animal.personality_description(),
                    animal.nickname(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(RepositoryError::persistence)?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                id: animal.id().clone(),
            });
        }

        tx.commit().map_err(RepositoryError::persistence)?;
        Ok(())
    }

    fn delete_animal(&mut self, animal: &Animal) -> RepositoryResult<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(RepositoryError::persistence)?;
        tx.execute(
            "DELETE FROM animals WHERE id = ?1",
            params![animal.id().as_str()],
        )
        .map_err(RepositoryError::persistence)?;
        tx.commit().map_err(RepositoryError::persistence)?;
        Ok(())
    }

    /// Narrows by species in SQL; the text match runs on the rebuilt
    /// animals so case folding is Unicode-aware like the other stores.
    fn get_animals_with_characteristic(
        &self,
        species: &str,
        characteristic: &str,
    ) -> RepositoryResult<Vec<Animal>> {
        let Some(species) = Species::parse(species.trim()) else {
            return Ok(Vec::new());
        };
        Ok(self
            .query(
                "WHERE LOWER(discriminator) = ?1 ORDER BY rowid",
                params![species.as_str()],
            )?
            .into_iter()
            .filter(|a| a.matches_characteristic(species.as_str(), characteristic))
            .collect())
    }

    fn save_changes(&mut self) -> RepositoryResult<()> {
        // Each mutation already committed its own transaction.
        Ok(())
    }
}
