//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! catalog table. Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and business logic layer. Each repository
//! is generic over `ConnectionTrait` so services can run several calls in one transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
