//! User service for business logic.
//!
//! This module provides the `UserService` for sign-up, log-in and user listing. It
//! hashes passwords on sign-up, verifies them on log-in and attaches each user's
//! favorites before handing users back to controllers.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, CredentialsParam, User, UserWithFavorites},
    util::password::{hash_password, verify_password},
};

const EMAIL_TAKEN_MSG: &str = "email already registered";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new active user.
    ///
    /// Rejects an email that is already registered, then stores an Argon2id hash of the
    /// password. A concurrent sign-up with the same email that slips past the lookup is
    /// caught by the unique index and reported the same way.
    ///
    /// # Arguments
    /// - `param` - Submitted email and plaintext password
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - The created user with empty favorite lists
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalError)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn sign_up(&self, param: CredentialsParam) -> Result<UserWithFavorites, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN_MSG.to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(EMAIL_TAKEN_MSG.to_string())
                }
                _ => AppError::DbErr(e),
            })?;

        tracing::info!("User {} signed up", user.id);

        Ok(UserWithFavorites {
            user,
            favorites: Default::default(),
        })
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// # Arguments
    /// - `param` - Submitted email and plaintext password
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn log_in(&self, param: CredentialsParam) -> Result<UserWithFavorites, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&param.password, &user.password_hash)? {
            tracing::debug!("Rejected log-in for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.with_favorites(user).await?)
    }

    /// Gets every user with their favorites, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<UserWithFavorites>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let mut favorites = FavoriteRepository::new(self.db)
            .get_for_users(&user_ids)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| UserWithFavorites {
                favorites: favorites.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }

    async fn with_favorites(&self, user: User) -> Result<UserWithFavorites, DbErr> {
        let favorites = FavoriteRepository::new(self.db)
            .get_for_user(user.id)
            .await?;

        Ok(UserWithFavorites { user, favorites })
    }
}
