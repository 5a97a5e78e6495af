use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub average_height: f64,
    pub average_lifespan: f64,
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateSpeciesDto {
    pub name: Option<String>,
    pub average_height: Option<f64>,
    pub average_lifespan: Option<f64>,
    pub language: Option<String>,
}
