use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user matches the submitted email and password.
    ///
    /// Unknown emails and wrong passwords share this variant so the response does
    /// not reveal which emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
        }
    }
}
