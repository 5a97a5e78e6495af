//! Favorites endpoints.
//!
//! Adding a pair that is already present or removing one that is absent returns
//! 400, so clients can tell a no-op apart from a change.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{FavoritesDto, UserDto},
    },
    server::{
        controller::extract::Path, error::AppError, model::favorite::FavoriteKind,
        service::favorite::FavoriteService, state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's favorite species, characters and planets", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).list(user_id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character added; returns the updated user", body = UserDto),
        (status = 400, description = "Character already in favorites", body = ErrorDto),
        (status = 404, description = "User or Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Character, character_id).await
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character removed; returns the updated user", body = UserDto),
        (status = 400, description = "Character not in favorites", body = ErrorDto),
        (status = 404, description = "User or Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Character, character_id).await
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet added; returns the updated user", body = UserDto),
        (status = 400, description = "Planet already in favorites", body = ErrorDto),
        (status = 404, description = "User or Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Planet, planet_id).await
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet removed; returns the updated user", body = UserDto),
        (status = 400, description = "Planet not in favorites", body = ErrorDto),
        (status = 404, description = "User or Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Planet, planet_id).await
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/species/{species_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("species_id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Species added; returns the updated user", body = UserDto),
        (status = 400, description = "Species already in favorites", body = ErrorDto),
        (status = 404, description = "User or Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_species(
    State(state): State<AppState>,
    Path((user_id, species_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Species, species_id).await
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/species/{species_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("species_id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "Species removed; returns the updated user", body = UserDto),
        (status = 400, description = "Species not in favorites", body = ErrorDto),
        (status = 404, description = "User or Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_species(
    State(state): State<AppState>,
    Path((user_id, species_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Species, species_id).await
}

async fn add(
    state: &AppState,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let user = FavoriteService::new(&state.db)
        .add(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn remove(
    state: &AppState,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let user = FavoriteService::new(&state.db)
        .remove(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
