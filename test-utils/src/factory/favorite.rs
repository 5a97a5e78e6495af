//! Factories for the user favorite junction tables.
//!
//! Both sides of the pair must already exist; the junction rows carry foreign keys
//! to the user and to the favorited row.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a character as a favorite of a user.
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::user_favorite_character::Model, DbErr> {
    entity::user_favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
    }
    .insert(db)
    .await
}

/// Marks a planet as a favorite of a user.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::user_favorite_planet::Model, DbErr> {
    entity::user_favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
    }
    .insert(db)
    .await
}

/// Marks a species as a favorite of a user.
pub async fn create_favorite_species(
    db: &DatabaseConnection,
    user_id: i32,
    species_id: i32,
) -> Result<entity::user_favorite_species::Model, DbErr> {
    entity::user_favorite_species::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        species_id: ActiveValue::Set(species_id),
    }
    .insert(db)
    .await
}
