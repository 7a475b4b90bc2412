use sea_orm::entity::prelude::*;

/// Discriminator telling which table `favorite.favorite_id` points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FavoriteType {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "character")]
    Character,
}
