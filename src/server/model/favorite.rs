//! Favorite domain models.
//!
//! A favorite ties a user to either a planet or a character. The target is identified by
//! `favorite_id` together with the `FavoriteType` discriminator.

use entity::sea_orm_active_enums::FavoriteType;

use crate::model::favorite::{FavoriteDto, FavoriteTypeDto};

/// A user's favorite planet or character.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    /// ID of the planet or character, depending on `favorite_type`.
    pub favorite_id: i32,
    pub favorite_type: FavoriteType,
}

impl Favorite {
    /// Converts an entity model to a favorite domain model at the repository boundary.
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            favorite_id: entity.favorite_id,
            favorite_type: entity.favorite_type,
        }
    }

    /// Converts the favorite domain model to a DTO for API responses.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            favorite_id: self.favorite_id,
            favorite_type: favorite_type_dto(self.favorite_type),
        }
    }
}

pub fn favorite_type_dto(favorite_type: FavoriteType) -> FavoriteTypeDto {
    match favorite_type {
        FavoriteType::Planet => FavoriteTypeDto::Planet,
        FavoriteType::Character => FavoriteTypeDto::Character,
    }
}

/// Human-readable name of the favorited table, used in response messages.
pub fn favorite_type_label(favorite_type: FavoriteType) -> &'static str {
    match favorite_type {
        FavoriteType::Planet => "Planet",
        FavoriteType::Character => "Character",
    }
}

/// Identifies one favorite of one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoriteTarget {
    pub user_id: i32,
    pub favorite_id: i32,
    pub favorite_type: FavoriteType,
}
