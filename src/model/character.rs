use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: i32,
    pub species_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: Option<i32>,
    pub species_id: Option<i32>,
}
