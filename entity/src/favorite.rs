use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::FavoriteType;

/// A user's favorite planet or character.
///
/// Neither `user_id` nor `favorite_id` is a foreign key: `favorite_id` is resolved against
/// the table named by `favorite_type`, and a favorite outlives the user, planet or character
/// it points to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub favorite_id: i32,
    pub favorite_type: FavoriteType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
