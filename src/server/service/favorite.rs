//! Favorites manager.
//!
//! Adds, removes and lists the characters, planets and species a user has marked as
//! favorites. Add and remove are deliberately not idempotent: adding a pair that
//! already exists or removing one that does not is rejected with a 400 rather than
//! accepted silently.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository,
        planet::PlanetRepository, species::SpeciesRepository, user::UserRepository,
    },
    error::{favorite::FavoriteError, AppError},
    model::{
        favorite::{FavoriteKind, Favorites},
        user::{User, UserWithFavorites},
    },
};

/// Service providing the favorites add/remove/list operations.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character, planet or species as a favorite of a user.
    ///
    /// The existence check and insert are not wrapped in a transaction; two concurrent
    /// adds of the same pair are resolved by the junction table's primary key and the
    /// loser receives the same `AlreadyInFavorites` error.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `kind` - What is being favorited
    /// - `target_id` - ID of the character, planet or species
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - The user with updated favorites
    /// - `Err(FavoriteError::NotFound)` - User or target does not exist (404)
    /// - `Err(FavoriteError::AlreadyInFavorites)` - Pair already present (400)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<UserWithFavorites, AppError> {
        let user = self.require_pair(user_id, kind, target_id).await?;
        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo.exists(kind, user_id, target_id).await? {
            return Err(FavoriteError::AlreadyInFavorites(kind).into());
        }

        favorite_repo
            .add(kind, user_id, target_id)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::from(FavoriteError::AlreadyInFavorites(kind))
                }
                _ => AppError::DbErr(e),
            })?;

        tracing::debug!("User {} added {} {} to favorites", user_id, kind, target_id);

        self.with_favorites(user).await
    }

    /// Removes a character, planet or species from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - The user with updated favorites
    /// - `Err(FavoriteError::NotFound)` - User or target does not exist (404)
    /// - `Err(FavoriteError::NotInFavorites)` - Pair absent (400)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<UserWithFavorites, AppError> {
        let user = self.require_pair(user_id, kind, target_id).await?;

        let removed = FavoriteRepository::new(self.db)
            .remove(kind, user_id, target_id)
            .await?;
        if removed == 0 {
            return Err(FavoriteError::NotInFavorites(kind).into());
        }

        tracing::debug!(
            "User {} removed {} {} from favorites",
            user_id,
            kind,
            target_id
        );

        self.with_favorites(user).await
    }

    /// Lists everything a user has marked as a favorite.
    ///
    /// # Returns
    /// - `Ok(Favorites)` - Species, characters and planets favorited by the user
    /// - `Err(AppError::NotFound)` - `User not found`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, user_id: i32) -> Result<Favorites, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(FavoriteRepository::new(self.db)
            .get_for_user(user_id)
            .await?)
    }

    /// Loads the user and checks the target exists, failing with `NotFound` if either is missing.
    async fn require_pair(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        let target_exists = match kind {
            FavoriteKind::Character => CharacterRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            FavoriteKind::Planet => PlanetRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            FavoriteKind::Species => SpeciesRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
        };

        match user {
            Some(user) if target_exists => Ok(user),
            _ => Err(FavoriteError::NotFound(kind).into()),
        }
    }

    async fn with_favorites(&self, user: User) -> Result<UserWithFavorites, AppError> {
        let favorites = FavoriteRepository::new(self.db)
            .get_for_user(user.id)
            .await?;

        Ok(UserWithFavorites { user, favorites })
    }
}
