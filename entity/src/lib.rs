//! SeaORM entity models for the catalog schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude` module
//! re-exports every entity under its table-level name for concise queries.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
