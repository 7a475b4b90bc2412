//! Favorite data repository for database operations.
//!
//! Provides the `FavoriteRepository` for the polymorphic `favorite` join table. Rows are
//! addressed by `FavoriteTarget` (user, target ID and target type) rather than by their own
//! primary key.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::server::model::favorite::{Favorite, FavoriteTarget};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every favorite of every user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - All favorites (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Gets the favorites of a single user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds the favorite matching a user, target ID and target type.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user already favorited the target
    /// - `Ok(None)` - No such favorite
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, target: FavoriteTarget) -> Result<Option<Favorite>, DbErr> {
        let entity = Self::select_target(target).one(self.db).await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Inserts a favorite without checking that the target exists.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error, including a unique violation when the favorite
    ///   already exists
    pub async fn create(&self, target: FavoriteTarget) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(target.user_id),
            favorite_id: ActiveValue::Set(target.favorite_id),
            favorite_type: ActiveValue::Set(target.favorite_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Deletes the favorite matching a user, target ID and target type.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was deleted
    /// - `Ok(false)` - No such favorite
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(target.user_id))
            .filter(entity::favorite::Column::FavoriteId.eq(target.favorite_id))
            .filter(entity::favorite::Column::FavoriteType.eq(target.favorite_type))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn select_target(target: FavoriteTarget) -> Select<entity::prelude::Favorite> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(target.user_id))
            .filter(entity::favorite::Column::FavoriteId.eq(target.favorite_id))
            .filter(entity::favorite::Column::FavoriteType.eq(target.favorite_type))
    }
}
