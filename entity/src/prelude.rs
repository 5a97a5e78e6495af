pub use super::character::Entity as Character;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::user::Entity as User;
pub use super::user_favorite_character::Entity as UserFavoriteCharacter;
pub use super::user_favorite_planet::Entity as UserFavoritePlanet;
pub use super::user_favorite_species::Entity as UserFavoriteSpecies;
