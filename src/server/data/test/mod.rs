mod character;
mod favorite;
mod planet;
mod species;
mod user;
