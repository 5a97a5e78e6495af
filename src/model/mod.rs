//! Transport models shared by the HTTP API.
//!
//! DTOs in this module define the exact JSON shape of request and response bodies.
//! Request DTOs keep every field optional so presence can be checked explicitly by the
//! controllers rather than failing deserialization on the first absent key.

pub mod api;
pub mod character;
pub mod planet;
pub mod species;
pub mod user;
