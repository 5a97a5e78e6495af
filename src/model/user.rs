use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto, species::SpeciesDto};

/// Serialized user. Never carries the password or its hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub favorite_characters: Vec<CharacterDto>,
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_species: Vec<SpeciesDto>,
}

/// Body shared by sign-up and log-in.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CredentialsDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FavoritesDto {
    pub species: Vec<SpeciesDto>,
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
}
