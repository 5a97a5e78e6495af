//! SeaORM entity definitions for the holocron catalog.

pub mod prelude;

pub mod character;
pub mod planet;
pub mod species;
pub mod user;
pub mod user_favorite_character;
pub mod user_favorite_planet;
pub mod user_favorite_species;
