//! HTTP request handlers.
//!
//! Each handler parses its request, converts DTOs into parameter models, calls the
//! matching service and converts the resulting domain model back into a DTO. Every
//! handler is annotated with `utoipa::path` so it is registered in the OpenAPI document.

pub mod character;
pub mod extract;
pub mod favorite;
pub mod hello;
pub mod planet;
pub mod species;
pub mod user;

#[cfg(test)]
mod test;
