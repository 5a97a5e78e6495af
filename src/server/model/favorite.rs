//! Domain models for user favorites.

use std::fmt;

use crate::{
    model::user::FavoritesDto,
    server::model::{character::Character, planet::Planet, species::Species},
};

/// The kind of row a user can mark as a favorite.
///
/// Each kind is backed by its own junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Species,
}

impl FavoriteKind {
    /// Capitalized name used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Species => "Species",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a single user has marked as a favorite, each list ordered by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
    pub species: Vec<Species>,
}

impl Favorites {
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            species: self.species.into_iter().map(|s| s.into_dto()).collect(),
            characters: self.characters.into_iter().map(|c| c.into_dto()).collect(),
            planets: self.planets.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}
