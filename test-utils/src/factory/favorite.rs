//! Favorite factory for creating test favorite entities.

use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Inserts a favorite row without checking that the target exists.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user's ID; the user must exist
/// - `favorite_id` - ID of the planet or character
/// - `favorite_type` - Which table `favorite_id` refers to
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    favorite_id: i32,
    favorite_type: FavoriteType,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        favorite_id: ActiveValue::Set(favorite_id),
        favorite_type: ActiveValue::Set(favorite_type),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a planet favorite for the given user.
pub async fn create_planet_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite(db, user_id, planet_id, FavoriteType::Planet).await
}

/// Creates a character favorite for the given user.
pub async fn create_character_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite(db, user_id, character_id, FavoriteType::Character).await
}
