//! Character data repository for database operations
//!
//! Provides the `CharacterRepository` for creating and reading characters. The
//! homeworld and species references are stored as raw IDs backed by foreign keys, so
//! inserting a character whose planet or species is missing fails at the database.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::character::{Character, CreateCharacterParam};

/// Repository providing database operations for characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the character fields
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with its assigned ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let entity = entity::prelude::Character::insert(entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            hair_color: ActiveValue::Set(param.hair_color),
            eye_color: ActiveValue::Set(param.eye_color),
            homeworld_id: ActiveValue::Set(param.homeworld_id),
            species_id: ActiveValue::Set(param.species_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Finds a character by ID
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character if found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
