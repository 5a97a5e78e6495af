//! Species factory for creating test species entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test species with customizable fields.
pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    average_height: f64,
    average_lifespan: f64,
    language: String,
}

impl<'a> SpeciesFactory<'a> {
    /// Creates a new SpeciesFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Species {id}"`
    /// - average_height: `180.0`
    /// - average_lifespan: `120.0`
    /// - language: `"Galactic Basic"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Species {}", id),
            average_height: 180.0,
            average_lifespan: 120.0,
            language: "Galactic Basic".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builds and inserts the species entity into the database.
    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        entity::species::ActiveModel {
            name: ActiveValue::Set(self.name),
            average_height: ActiveValue::Set(self.average_height),
            average_lifespan: ActiveValue::Set(self.average_lifespan),
            language: ActiveValue::Set(self.language),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a species with default values.
pub async fn create_species(db: &DatabaseConnection) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db).build().await
}
