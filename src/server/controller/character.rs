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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        controller::extract::Path, error::AppError, model::character::CreateCharacterParam,
        service::character::CharacterService, state::AppState, util::parse::parse_body,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Create a character
///
/// Requires `name`, `homeworld_id` and `species_id`; hair and eye color are optional.
/// The referenced planet and species must already exist.
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Missing body, missing field or unknown homeworld/species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCharacterParam::from_dto(parse_body(&body)?)?;

    let character = CharacterService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Every character ordered by ID", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dto: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
