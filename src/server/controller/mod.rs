//! HTTP controller endpoints for the catalog API.
//!
//! Controllers extract path parameters, JSON bodies and the current user, convert DTOs into
//! domain parameters, call the matching service and map the result to a JSON response.
//! Every handler is annotated for utoipa so the OpenAPI document and the sitemap stay in
//! sync with the registered routes.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
