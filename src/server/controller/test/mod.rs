//! Tests for the HTTP handlers.
//!
//! Handlers are called directly with extracted arguments and the resulting
//! response is inspected for status and JSON body.

use axum::{
    body::{to_bytes, Bytes},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{controller::extract::Path, state::AppState};

mod favorite;

/// Reads a response body as JSON.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn body(value: Value) -> Bytes {
    Bytes::from(value.to_string())
}
