//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a character along with the planet and species it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((planet, species, character))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_character_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::planet::Model,
        entity::species::Model,
        entity::character::Model,
    ),
    DbErr,
> {
    let planet = crate::factory::planet::create_planet(db).await?;
    let species = crate::factory::species::create_species(db).await?;
    let character = crate::factory::character::create_character(db, planet.id, species.id).await?;

    Ok((planet, species, character))
}
