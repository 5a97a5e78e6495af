//! Character service for business logic.
//!
//! Character creation checks that the referenced homeworld and species exist before
//! inserting, so a dangling reference is reported as a bad request instead of surfacing
//! as a foreign key failure.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, planet::PlanetRepository, species::SpeciesRepository,
    },
    error::AppError,
    model::character::{Character, CreateCharacterParam},
};

/// Service providing business logic for characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character from validated parameters.
    ///
    /// # Arguments
    /// - `param` - Character fields including homeworld and species IDs
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character
    /// - `Err(AppError::BadRequest)` - `homeworld does not exist` or `species does not exist`
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        if PlanetRepository::new(self.db)
            .find_by_id(param.homeworld_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("homeworld does not exist".to_string()));
        }

        if SpeciesRepository::new(self.db)
            .find_by_id(param.species_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("species does not exist".to_string()));
        }

        let character = CharacterRepository::new(self.db).create(param).await?;

        tracing::debug!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }

    /// Gets a character by ID.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(AppError::NotFound)` - `Character not found`
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }

    /// Gets every character.
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }
}
