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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        controller::extract::Path, error::AppError, model::planet::CreatePlanetParam,
        service::planet::PlanetService, state::AppState, util::parse::parse_body,
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    post,
    path = "/api/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Missing body or required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePlanetParam::from_dto(parse_body(&body)?)?;

    let planet = PlanetService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet ordered by ID", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dto: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
