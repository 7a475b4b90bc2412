use sea_orm_migration::{prelude::*, schema::*};

use super::m20250329_000002_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer_uniq(Character::Uid))
                    .col(string_len(Character::Name, 100))
                    .col(string_len(Character::Gender, 20))
                    .col(string_len(Character::SkinColor, 50))
                    .col(string_len(Character::HairColor, 50))
                    .col(integer(Character::Height))
                    .col(string_len(Character::EyeColor, 50))
                    .col(integer(Character::Mass))
                    .col(integer_null(Character::Homeworld))
                    .col(string_len(Character::BirthYear, 20))
                    .col(string_len(Character::Url, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_homeworld")
                            .from(Character::Table, Character::Homeworld)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Uid,
    Name,
    Gender,
    SkinColor,
    HairColor,
    Height,
    EyeColor,
    Mass,
    Homeworld,
    BirthYear,
    Url,
}
