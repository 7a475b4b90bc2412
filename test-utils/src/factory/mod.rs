//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating catalog entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let planet = factory::planet::create_planet(&db).await?;
//!     let favorite = factory::favorite::create_planet_favorite(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let luke = factory::character::CharacterFactory::new(&db)
//!     .name("Luke Skywalker")
//!     .homeworld(Some(tatooine.id))
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{create_character_favorite, create_planet_favorite};
pub use planet::create_planet;
pub use user::create_user;
