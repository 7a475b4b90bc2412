//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes accepted and returned by the controllers. Request DTOs
//! keep every field optional so presence can be validated per field rather than rejected by
//! the deserializer as a whole.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
