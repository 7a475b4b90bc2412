use crate::server::{data::favorite::FavoriteRepository, model::favorite::FavoriteTarget};
use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod get_by_user;
