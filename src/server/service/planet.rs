//! Planet service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParam, Planet},
};

/// Service providing business logic for planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet from validated parameters.
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;

        tracing::debug!("Created planet {} ({})", planet.id, planet.name);

        Ok(planet)
    }

    /// Gets a planet by ID.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The planet
    /// - `Err(AppError::NotFound)` - `Planet not found`
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    /// Gets every planet.
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }
}
