//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Every endpoint is registered here together with its OpenAPI specification,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Requests from any origin are accepted; the CORS layer answers preflight requests
/// for every route, including the documentation.
///
/// # Registered Endpoints
/// - `GET|POST /api/hello` - Greeting
/// - `POST /api/users/sign-up`, `POST /api/users/log-in`, `GET /api/users` - Users
/// - `GET /api/users/{user_id}/favorites` - A user's favorites
/// - `POST|DELETE /api/users/{user_id}/favorites/{characters,planets,species}/{id}` - Favorites
/// - `POST|GET /api/characters`, `GET /api/characters/{id}` - Characters
/// - `POST|GET /api/planets`, `GET /api/planets/{id}` - Planets
/// - `POST|GET /api/species`, `GET /api/species/{id}` - Species
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog API"), tags(
        (name = controller::hello::HELLO_TAG, description = "Backend greeting"),
        (name = controller::user::USER_TAG, description = "User sign-up, log-in and listing"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites"),
        (name = controller::character::CHARACTER_TAG, description = "Characters catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planets catalog"),
        (name = controller::species::SPECIES_TAG, description = "Species catalog"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::hello::hello))
        .routes(routes!(controller::user::sign_up))
        .routes(routes!(controller::user::log_in))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_species,
            controller::favorite::remove_favorite_species
        ))
        .routes(routes!(
            controller::character::create_character,
            controller::character::get_all_characters
        ))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(
            controller::planet::create_planet,
            controller::planet::get_all_planets
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::species::create_species,
            controller::species::get_all_species
        ))
        .routes(routes!(controller::species::get_species))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
}
