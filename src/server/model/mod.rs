//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Create parameters are built from
//! request DTOs after presence validation; update parameters are allow-listed patches.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
