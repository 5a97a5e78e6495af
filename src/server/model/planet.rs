//! Domain & parameter models for planet operations

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, util::parse::require},
};

/// The planet domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: i64,
}

impl Planet {
    /// Converts an entity model to the planet domain model
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            population: entity.population,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            population: self.population,
        }
    }
}

/// Parameters for creating a new planet
#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
    pub population: i64,
}

impl CreatePlanetParam {
    /// Builds create parameters from the request DTO, rejecting the first absent field.
    ///
    /// # Returns
    /// - `Ok(CreatePlanetParam)` - All required fields present
    /// - `Err(AppError::BadRequest)` - `name is required` or `population is required`
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require(dto.name, "name")?,
            population: require(dto.population, "population")?,
        })
    }
}
