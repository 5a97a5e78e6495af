//! Domain & parameter models for species operations

use crate::{
    model::species::{CreateSpeciesDto, SpeciesDto},
    server::{error::AppError, util::parse::require},
};

/// The species domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: i32,
    pub name: String,
    pub average_height: f64,
    pub average_lifespan: f64,
    pub language: String,
}

impl Species {
    /// Converts an entity model to the species domain model
    pub fn from_entity(entity: entity::species::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            average_height: entity.average_height,
            average_lifespan: entity.average_lifespan,
            language: entity.language,
        }
    }

    pub fn into_dto(self) -> SpeciesDto {
        SpeciesDto {
            id: self.id,
            name: self.name,
            average_height: self.average_height,
            average_lifespan: self.average_lifespan,
            language: self.language,
        }
    }
}

/// Parameters for creating a new species
#[derive(Debug, Clone)]
pub struct CreateSpeciesParam {
    pub name: String,
    pub average_height: f64,
    pub average_lifespan: f64,
    pub language: String,
}

impl CreateSpeciesParam {
    /// Builds create parameters from the request DTO.
    ///
    /// Fields are checked in order: name, average height, average lifespan, language.
    /// The first absent one is reported.
    pub fn from_dto(dto: CreateSpeciesDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require(dto.name, "name")?,
            average_height: require(dto.average_height, "average height")?,
            average_lifespan: require(dto.average_lifespan, "average lifespan")?,
            language: require(dto.language, "language")?,
        })
    }
}
