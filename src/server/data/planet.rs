//! Planet data repository for database operations
//!
//! Provides the `PlanetRepository` for creating and reading planets, converting
//! entity models into domain models for usage within services & controllers.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::planet::{CreatePlanetParam, Planet};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the planet fields
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet with its assigned ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            population: ActiveValue::Set(param.population),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Finds a planet by ID
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - The planet if found
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
