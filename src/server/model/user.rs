//! Domain & parameter models for user operations

use crate::{
    model::user::{CredentialsDto, UserDto},
    server::{error::AppError, model::favorite::Favorites, util::parse::require},
};

/// The user domain model
///
/// Holds the stored password hash; it is dropped when converting to a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to the user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            is_active: entity.is_active,
        }
    }
}

/// A user together with the three lists of their favorites.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorites: Favorites,
}

impl UserWithFavorites {
    pub fn into_dto(self) -> UserDto {
        let favorites = self.favorites;

        UserDto {
            id: self.user.id,
            email: self.user.email,
            is_active: self.user.is_active,
            favorite_characters: favorites
                .characters
                .into_iter()
                .map(|c| c.into_dto())
                .collect(),
            favorite_planets: favorites.planets.into_iter().map(|p| p.into_dto()).collect(),
            favorite_species: favorites.species.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

/// Submitted email and plaintext password, used for both sign-up and log-in.
#[derive(Debug, Clone)]
pub struct CredentialsParam {
    pub email: String,
    pub password: String,
}

impl CredentialsParam {
    /// Builds credentials from the request DTO, checking email then password.
    pub fn from_dto(dto: CredentialsDto) -> Result<Self, AppError> {
        Ok(Self {
            email: require(dto.email, "email")?,
            password: require(dto.password, "password")?,
        })
    }
}

/// Parameters for inserting a user row.
///
/// The password has already been hashed by the service layer.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
}
