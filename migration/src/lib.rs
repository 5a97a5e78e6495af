pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_planet_table;
mod m20260105_000002_create_species_table;
mod m20260105_000003_create_character_table;
mod m20260105_000004_create_user_table;
mod m20260106_000005_create_user_favorite_character_table;
mod m20260106_000006_create_user_favorite_planet_table;
mod m20260106_000007_create_user_favorite_species_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_planet_table::Migration),
            Box::new(m20260105_000002_create_species_table::Migration),
            Box::new(m20260105_000003_create_character_table::Migration),
            Box::new(m20260105_000004_create_user_table::Migration),
            Box::new(m20260106_000005_create_user_favorite_character_table::Migration),
            Box::new(m20260106_000006_create_user_favorite_planet_table::Migration),
            Box::new(m20260106_000007_create_user_favorite_species_table::Migration),
        ]
    }
}
