use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CredentialsDto, UserDto},
    },
    server::{
        error::AppError, model::user::CredentialsParam, service::user::UserService,
        state::AppState, util::parse::parse_body,
    },
};

pub static USER_TAG: &str = "user";

/// Register a new user
///
/// Requires `email` and `password`. The password is stored as an Argon2id hash and is
/// never returned.
#[utoipa::path(
    post,
    path = "/api/users/sign-up",
    tag = USER_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Missing body, email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let param = CredentialsParam::from_dto(parse_body(&body)?)?;

    let user = UserService::new(&state.db).sign_up(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Verify a user's credentials
#[utoipa::path(
    post,
    path = "/api/users/log-in",
    tag = USER_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Credentials are valid", body = UserDto),
        (status = 400, description = "Missing body, email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_in(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let param = CredentialsParam::from_dto(parse_body(&body)?)?;

    let user = UserService::new(&state.db).log_in(param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user with their favorites", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
