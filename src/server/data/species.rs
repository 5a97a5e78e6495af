//! Species data repository for database operations

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::species::{CreateSpeciesParam, Species};

/// Repository providing database operations for species.
pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new species
    ///
    /// # Returns
    /// - `Ok(Species)` - The created species with its assigned ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateSpeciesParam) -> Result<Species, DbErr> {
        let entity = entity::prelude::Species::insert(entity::species::ActiveModel {
            name: ActiveValue::Set(param.name),
            average_height: ActiveValue::Set(param.average_height),
            average_lifespan: ActiveValue::Set(param.average_lifespan),
            language: ActiveValue::Set(param.language),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Species::from_entity(entity))
    }

    /// Finds a species by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Species>, DbErr> {
        let entity = entity::prelude::Species::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Species::from_entity))
    }

    /// Gets every species ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Species>, DbErr> {
        let entities = entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Species::from_entity).collect())
    }
}
