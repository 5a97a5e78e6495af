use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static HELLO_TAG: &str = "hello";

const GREETING: &str = "Hello! I'm a message that came from the backend, check the network tab on the google inspector and you will see the GET request";

/// Fixed greeting used by clients to check the backend is reachable.
#[utoipa::path(
    method(get, post),
    path = "/api/hello",
    tag = HELLO_TAG,
    responses(
        (status = 200, description = "Greeting from the backend", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: GREETING.to_string(),
        }),
    )
}
