use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(integer_uniq(Planet::Uid))
                    .col(string_len(Planet::Name, 100))
                    .col(string_len(Planet::Climate, 100))
                    .col(integer(Planet::Diameter))
                    .col(string_len(Planet::Gravity, 100))
                    .col(integer(Planet::OrbitalPeriod))
                    .col(big_integer(Planet::Population))
                    .col(integer(Planet::RotationPeriod))
                    .col(string_len(Planet::Terrain, 100))
                    .col(string_len(Planet::Url, 200))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Uid,
    Name,
    Climate,
    Diameter,
    Gravity,
    OrbitalPeriod,
    Population,
    RotationPeriod,
    Terrain,
    Url,
}
