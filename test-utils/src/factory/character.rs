//! Character factory for creating test character entities.
//!
//! Characters reference a homeworld planet and a species, so both must exist
//! before calling the factory. See
//! [`create_character_with_dependencies`](crate::factory::helpers::create_character_with_dependencies)
//! for a shortcut that creates them too.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    hair_color: Option<String>,
    eye_color: Option<String>,
    homeworld_id: i32,
    species_id: i32,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - hair_color: `None`
    /// - eye_color: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `homeworld_id` - ID of an existing planet
    /// - `species_id` - ID of an existing species
    pub fn new(db: &'a DatabaseConnection, homeworld_id: i32, species_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            hair_color: None,
            eye_color: None,
            homeworld_id,
            species_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hair_color(mut self, hair_color: impl Into<String>) -> Self {
        self.hair_color = Some(hair_color.into());
        self
    }

    pub fn eye_color(mut self, eye_color: impl Into<String>) -> Self {
        self.eye_color = Some(eye_color.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            hair_color: ActiveValue::Set(self.hair_color),
            eye_color: ActiveValue::Set(self.eye_color),
            homeworld_id: ActiveValue::Set(self.homeworld_id),
            species_id: ActiveValue::Set(self.species_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values referencing the given planet and species.
pub async fn create_character(
    db: &DatabaseConnection,
    homeworld_id: i32,
    species_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, homeworld_id, species_id)
        .build()
        .await
}
