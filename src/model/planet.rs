use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
}
