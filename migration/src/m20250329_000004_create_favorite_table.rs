use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::FavoriteId))
                    .col(string_len(Favorite::FavoriteType, 16))
                    .to_owned(),
            )
            .await?;

        // A user can favorite a given planet or character only once
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_unique_target")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::FavoriteId)
                    .col(Favorite::FavoriteType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_favorite_unique_target")
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    FavoriteId,
    FavoriteType,
}
