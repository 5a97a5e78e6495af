//! User favorite repository for database operations.
//!
//! This module provides the `FavoriteRepository` for managing the three many-to-many
//! relationships between users and the characters, planets and species they mark as
//! favorites. Each relationship lives in its own junction table keyed by the
//! (user, target) pair, so a pair can exist at most once.
//!
//! The repository performs no existence or duplicate checks of its own; inserting a
//! pair that already exists fails with a unique constraint violation and deleting an
//! absent pair affects zero rows. The favorites service interprets both outcomes.

use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    character::Character,
    favorite::{FavoriteKind, Favorites},
    planet::Planet,
    species::Species,
};

/// Repository for user favorite junction operations.
pub struct FavoriteRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the user already has the target as a favorite.
    ///
    /// # Arguments
    /// - `kind` - Which junction table to look in
    /// - `user_id` - ID of the user
    /// - `target_id` - ID of the character, planet or species
    ///
    /// # Returns
    /// - `Ok(true)` - The pair exists
    /// - `Ok(false)` - The pair does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let exists = match kind {
            FavoriteKind::Character => entity::prelude::UserFavoriteCharacter::find_by_id((
                user_id, target_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
            FavoriteKind::Planet => {
                entity::prelude::UserFavoritePlanet::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
            FavoriteKind::Species => {
                entity::prelude::UserFavoriteSpecies::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
        };

        Ok(exists)
    }

    /// Inserts the (user, target) pair into the junction table for `kind`.
    ///
    /// Fails with a unique constraint violation if the pair already exists, or a
    /// foreign key violation if either side is missing.
    ///
    /// # Returns
    /// - `Ok(())` - Pair inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, kind: FavoriteKind, user_id: i32, target_id: i32) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Character => {
                entity::prelude::UserFavoriteCharacter::insert(
                    entity::user_favorite_character::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        character_id: ActiveValue::Set(target_id),
                    },
                )
                .exec_without_returning(self.db)
                .await?;
            }
            FavoriteKind::Planet => {
                entity::prelude::UserFavoritePlanet::insert(
                    entity::user_favorite_planet::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        planet_id: ActiveValue::Set(target_id),
                    },
                )
                .exec_without_returning(self.db)
                .await?;
            }
            FavoriteKind::Species => {
                entity::prelude::UserFavoriteSpecies::insert(
                    entity::user_favorite_species::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        species_id: ActiveValue::Set(target_id),
                    },
                )
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes the (user, target) pair from the junction table for `kind`.
    ///
    /// # Returns
    /// - `Ok(1)` - Pair deleted
    /// - `Ok(0)` - Pair did not exist
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::Character => {
                entity::prelude::UserFavoriteCharacter::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::UserFavoritePlanet::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Species => {
                entity::prelude::UserFavoriteSpecies::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Gets all favorites of a single user.
    ///
    /// Does not check that the user exists; an unknown user simply has no favorites.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Favorites, DbErr> {
        let mut favorites = self.get_for_users(&[user_id]).await?;

        Ok(favorites.remove(&user_id).unwrap_or_default())
    }

    /// Gets the favorites of several users with one query per junction table.
    ///
    /// Users without any favorites are absent from the returned map.
    ///
    /// # Arguments
    /// - `user_ids` - IDs of the users to load favorites for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Favorites>)` - Favorites keyed by user ID, each list ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_users(&self, user_ids: &[i32]) -> Result<HashMap<i32, Favorites>, DbErr> {
        let mut favorites: HashMap<i32, Favorites> = HashMap::new();

        if user_ids.is_empty() {
            return Ok(favorites);
        }

        let characters = entity::prelude::UserFavoriteCharacter::find()
            .filter(entity::user_favorite_character::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user_favorite_character::Column::CharacterId)
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;
        for (link, character) in characters
            .into_iter()
            .filter_map(|(link, character)| character.map(|character| (link, character)))
        {
            favorites
                .entry(link.user_id)
                .or_default()
                .characters
                .push(Character::from_entity(character));
        }

        let planets = entity::prelude::UserFavoritePlanet::find()
            .filter(entity::user_favorite_planet::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user_favorite_planet::Column::PlanetId)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;
        for (link, planet) in planets
            .into_iter()
            .filter_map(|(link, planet)| planet.map(|planet| (link, planet)))
        {
            favorites
                .entry(link.user_id)
                .or_default()
                .planets
                .push(Planet::from_entity(planet));
        }

        let species = entity::prelude::UserFavoriteSpecies::find()
            .filter(entity::user_favorite_species::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user_favorite_species::Column::SpeciesId)
            .find_also_related(entity::prelude::Species)
            .all(self.db)
            .await?;
        for (link, species) in species
            .into_iter()
            .filter_map(|(link, species)| species.map(|species| (link, species)))
        {
            favorites
                .entry(link.user_id)
                .or_default()
                .species
                .push(Species::from_entity(species));
        }

        Ok(favorites)
    }
}
