use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Message returned when a request body is absent or is not a JSON object.
pub const MISSING_BODY_MSG: &str = "information is required";

/// Parses a JSON object request body into a request DTO.
///
/// Request DTOs keep all fields optional, so an object missing keys still parses
/// and presence is checked afterwards with [`require`].
///
/// # Arguments
/// - `body` - Raw request body bytes
///
/// # Returns
/// - `Ok(T)` - Body parsed into the DTO
/// - `Err(AppError::BadRequest)` - Body is empty, not JSON, or not a JSON object
///   (`information is required`), or a field has the wrong type
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest(MISSING_BODY_MSG.to_string()))?;

    if !value.is_object() {
        return Err(AppError::BadRequest(MISSING_BODY_MSG.to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("invalid information: {}", e)))
}

/// Unwraps a required request field.
///
/// Only absence (missing key or JSON `null`) is rejected; empty strings pass.
///
/// # Arguments
/// - `value` - The optional field from the request DTO
/// - `label` - Human readable field name used in the error message
///
/// # Returns
/// - `Ok(T)` - The field was present
/// - `Err(AppError::BadRequest)` - `"{label} is required"`
pub fn require<T>(value: Option<T>, label: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{} is required", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::planet::CreatePlanetDto;

    fn bad_request_msg(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_body() {
        let err = parse_body::<CreatePlanetDto>(b"").unwrap_err();
        assert_eq!(bad_request_msg(err), MISSING_BODY_MSG);
    }

    #[test]
    fn rejects_null_and_non_object_bodies() {
        for body in [&b"null"[..], b"[]", b"42", b"\"planet\"", b"{not json"] {
            let err = parse_body::<CreatePlanetDto>(body).unwrap_err();
            assert_eq!(bad_request_msg(err), MISSING_BODY_MSG);
        }
    }

    #[test]
    fn parses_partial_object() {
        let dto = parse_body::<CreatePlanetDto>(br#"{"name": "Hoth"}"#).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Hoth"));
        assert!(dto.population.is_none());
    }

    #[test]
    fn reports_wrongly_typed_field() {
        let err = parse_body::<CreatePlanetDto>(br#"{"name": "Hoth", "population": "many"}"#)
            .unwrap_err();
        assert!(bad_request_msg(err).starts_with("invalid information"));
    }

    #[test]
    fn require_names_missing_field() {
        let err = require::<String>(None, "homeworld id").unwrap_err();
        assert_eq!(bad_request_msg(err), "homeworld id is required");
    }

    #[test]
    fn require_accepts_empty_string() {
        assert_eq!(require(Some(String::new()), "name").unwrap(), "");
    }
}
