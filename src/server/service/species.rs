//! Species service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::species::SpeciesRepository,
    error::AppError,
    model::species::{CreateSpeciesParam, Species},
};

/// Service providing business logic for species.
pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a species from validated parameters.
    pub async fn create(&self, param: CreateSpeciesParam) -> Result<Species, AppError> {
        let species = SpeciesRepository::new(self.db).create(param).await?;

        tracing::debug!("Created species {} ({})", species.id, species.name);

        Ok(species)
    }

    /// Gets a species by ID.
    ///
    /// # Returns
    /// - `Ok(Species)` - The species
    /// - `Err(AppError::NotFound)` - `Species not found`
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Species, AppError> {
        SpeciesRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Species not found".to_string()))
    }

    /// Gets every species.
    pub async fn get_all(&self) -> Result<Vec<Species>, AppError> {
        Ok(SpeciesRepository::new(self.db).get_all().await?)
    }
}
