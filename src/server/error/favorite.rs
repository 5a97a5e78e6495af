use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::favorite::FavoriteKind};

/// Rejections raised by the favorites manager.
///
/// Adding or removing a favorite is not idempotent: repeating an add or a remove
/// against unchanged state is reported as an error rather than silently accepted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteError {
    /// The user or the favorited row does not exist. Results in 404 Not Found.
    #[error("User or {0} not found")]
    NotFound(FavoriteKind),

    /// The pair is already present. Results in 400 Bad Request.
    #[error("{0} already in favorites")]
    AlreadyInFavorites(FavoriteKind),

    /// The pair is absent. Results in 400 Bad Request.
    #[error("{0} not in favorites")]
    NotInFavorites(FavoriteKind),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyInFavorites(_) | Self::NotInFavorites(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
