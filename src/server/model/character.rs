//! Domain & parameter models for character operations

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{error::AppError, util::parse::require},
};

/// The character domain model
///
/// `homeworld_id` and `species_id` are kept as raw ids and serialized the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: i32,
    pub species_id: i32,
}

impl Character {
    /// Converts an entity model to the character domain model
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            hair_color: entity.hair_color,
            eye_color: entity.eye_color,
            homeworld_id: entity.homeworld_id,
            species_id: entity.species_id,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            homeworld_id: self.homeworld_id,
            species_id: self.species_id,
        }
    }
}

/// Parameters for creating a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: i32,
    pub species_id: i32,
}

impl CreateCharacterParam {
    /// Builds create parameters from the request DTO.
    ///
    /// Required fields are checked in order: name, homeworld id, species id. Hair and
    /// eye color are optional.
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require(dto.name, "name")?,
            homeworld_id: require(dto.homeworld_id, "homeworld id")?,
            species_id: require(dto.species_id, "species id")?,
            hair_color: dto.hair_color,
            eye_color: dto.eye_color,
        })
    }
}
