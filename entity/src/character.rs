use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: i32,
    pub name: String,
    pub gender: String,
    pub skin_color: String,
    pub hair_color: String,
    pub height: i32,
    pub eye_color: String,
    pub mass: i32,
    pub homeworld: Option<i32>,
    pub birth_year: String,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::Homeworld",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Planet,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
