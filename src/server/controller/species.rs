use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        species::{CreateSpeciesDto, SpeciesDto},
    },
    server::{
        controller::extract::Path, error::AppError, model::species::CreateSpeciesParam,
        service::species::SpeciesService, state::AppState, util::parse::parse_body,
    },
};

pub static SPECIES_TAG: &str = "species";

#[utoipa::path(
    post,
    path = "/api/species",
    tag = SPECIES_TAG,
    request_body = CreateSpeciesDto,
    responses(
        (status = 201, description = "Successfully created species", body = SpeciesDto),
        (status = 400, description = "Missing body or required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSpeciesParam::from_dto(parse_body(&body)?)?;

    let species = SpeciesService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(species.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/species",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "Every species ordered by ID", body = Vec<SpeciesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_species(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let species = SpeciesService::new(&state.db).get_all().await?;

    let dto: Vec<SpeciesDto> = species.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/species/{id}",
    tag = SPECIES_TAG,
    params(
        ("id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved species", body = SpeciesDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let species = SpeciesService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(species.into_dto())))
}
